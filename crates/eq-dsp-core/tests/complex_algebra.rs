//! Algebraic identities of `Complex` and equivalence with `num_complex`.

use eq_dsp_core::{Complex, DefaultComplex, COMPLEX_PRECISION};
use num_complex::Complex as NativeComplex;

const GRID: [f64; 8] = [-2.5, -1.0, -0.0, 0.0, 0.3, 1.0, 7.25, 1e-3];

fn grid() -> impl Iterator<Item = Complex<f64>> {
    GRID.iter()
        .flat_map(|&re| GRID.iter().map(move |&im| Complex::new(re, im)))
}

fn same_bits(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn assert_same(ours: Complex<f64>, native: NativeComplex<f64>, what: &str) {
    assert!(
        same_bits(ours.re, native.re) && same_bits(ours.im, native.im),
        "{what}: {ours} vs {native}"
    );
}

#[test]
fn double_conjugate_is_identity() {
    for a in grid() {
        let back = a.conj().conj();
        assert_eq!(back.re.to_bits(), a.re.to_bits());
        assert_eq!(back.im.to_bits(), a.im.to_bits());
    }
}

#[test]
fn division_undoes_multiplication() {
    for a in grid() {
        for b in grid().filter(|b| b.norm_sqr() > 0.0) {
            let back = a.mul(b).div(b);
            let err = (back - a).abs();
            assert!(err <= 1e-6 * a.abs().max(1e-300), "{a} * {b} / {b} = {back}");
        }
    }
}

#[test]
fn division_undoes_multiplication_in_single_precision() {
    let a = Complex::new(0.75_f32, -1.5);
    let b = Complex::new(-2.0_f32, 0.25);
    let back = (a * b) / b;
    assert!((back - a).abs() <= 1e-6 * a.abs());
}

#[test]
fn product_with_conjugate_is_real() {
    for a in grid() {
        let p = a.mul(a.conj());
        assert_eq!(p.im, 0.0, "{a}");
        assert_eq!(p.re, a.re * a.re + a.im * a.im, "{a}");
    }
}

#[test]
fn arithmetic_matches_num_complex_bit_for_bit() {
    for a in grid() {
        for b in grid() {
            let (na, nb) = (NativeComplex::from(a), NativeComplex::from(b));
            assert_same(a + b, na + nb, "add");
            assert_same(a - b, na - nb, "sub");
            assert_same(a * b, na * nb, "mul");
            assert_same(a / b, na / nb, "div");
            assert_same(a.conj(), na.conj(), "conj");
            assert_same(-a, -na, "neg");
            assert_same(a * b.re, na * nb.re, "scale");
        }
    }
}

#[test]
fn transcendentals_match_num_complex() {
    for a in grid().filter(|a| a.norm_sqr() > 0.0) {
        let na = NativeComplex::from(a);
        assert_same(a.exp(), na.exp(), "exp");
        assert_same(a.ln(), na.ln(), "ln");
        assert_same(a.sqrt(), na.sqrt(), "sqrt");
        assert_same(a.sin(), na.sin(), "sin");
        assert_same(a.atanh(), na.atanh(), "atanh");
        assert_same(a.powf(2.5), na.powf(2.5), "powf");
        assert!(same_bits(a.abs(), na.norm()));
        assert!(same_bits(a.arg(), na.arg()));
    }
}

#[test]
fn set_real_returns_new_value() {
    let a = Complex::new(3.0_f64, 4.0);
    let b = a.set_real(-1.5);
    assert_eq!(b, Complex::new(-1.5, 0.0));
    assert_eq!(a, Complex::new(3.0, 4.0));
}

#[test]
fn zero_divisor_yields_ieee_specials() {
    let q = Complex::new(1.0_f64, 1.0) / Complex::zero();
    assert!(!q.is_finite());
    let q = Complex::<f64>::zero() / Complex::zero();
    assert!(q.is_nan());
}

#[test]
fn polar_round_trip() {
    let a = Complex::new(-0.6_f64, 0.8);
    let (r, theta) = a.to_polar();
    let back = Complex::from_polar(r, theta);
    assert!((back - a).abs() < 1e-15);
}

#[test]
fn default_complex_uses_selected_precision() {
    let z = DefaultComplex::new(1.0, -2.0);
    assert_eq!(
        core::mem::size_of_val(&z.re) * 8,
        COMPLEX_PRECISION.storage_bits() as usize
    );
    assert_eq!(z.conj(), DefaultComplex::new(1.0, 2.0));
}

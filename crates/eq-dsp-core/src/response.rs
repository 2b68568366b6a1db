//! Frequency response and pole/zero analysis of designed coefficients.
//!
//! Angular frequencies are in radians per sample, `w` in `[0, π]`.

use crate::biquad::BiquadCoeffs;
use crate::complex::Complex;
use crate::precision::Real;

/// Magnitude reported in dB when the linear magnitude is zero.
pub const MAGNITUDE_FLOOR_DB: f64 = -120.0;

impl<T: Real> BiquadCoeffs<T> {
    /// Evaluate `H(e^{jw})`.
    #[must_use]
    pub fn response(&self, w: T) -> Complex<T> {
        let z1 = Complex::from_polar(T::one(), -w);
        let z2 = z1 * z1;

        let num = Complex::from_real(self.b[0]) + z1 * self.b[1] + z2 * self.b[2];
        let den = Complex::one() + z1 * self.a[0] + z2 * self.a[1];
        num / den
    }

    /// Evaluate `H` at a frequency normalized to Nyquist (`w = π·f`).
    #[must_use]
    pub fn response_at(&self, f: T) -> Complex<T> {
        self.response(T::PI() * f)
    }

    /// `|H(e^{jw})|`
    #[must_use]
    pub fn magnitude(&self, w: T) -> T {
        self.response(w).abs()
    }

    /// `|H(e^{jw})|` in dB
    #[must_use]
    pub fn magnitude_db(&self, w: T) -> T {
        let mag = self.magnitude(w);
        if mag > T::zero() {
            T::cast(20.0) * mag.log10()
        } else {
            T::cast(MAGNITUDE_FLOOR_DB)
        }
    }

    /// Phase of `H(e^{jw})` in radians.
    #[must_use]
    pub fn phase(&self, w: T) -> T {
        self.response(w).arg()
    }

    /// Magnitude at `N` points spaced uniformly over `[0, π]`, ends included.
    #[must_use]
    pub fn magnitude_sweep<const N: usize>(&self) -> [T; N] {
        let last = T::cast(N.saturating_sub(1).max(1) as f64);
        core::array::from_fn(|k| self.magnitude(T::PI() * T::cast(k as f64) / last))
    }

    /// Roots of `z² + a1·z + a2`.
    #[must_use]
    pub fn poles(&self) -> [Complex<T>; 2] {
        quadratic_roots(T::one(), self.a[0], self.a[1])
    }

    /// Roots of `b0·z² + b1·z + b2`.
    ///
    /// With `b0 == 0` the roots are not finite.
    #[must_use]
    pub fn zeros(&self) -> [Complex<T>; 2] {
        quadratic_roots(self.b[0], self.b[1], self.b[2])
    }

    /// Both poles strictly inside the unit circle.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.poles().iter().all(|p| p.abs() < T::one())
    }
}

fn quadratic_roots<T: Real>(a: T, b: T, c: T) -> [Complex<T>; 2] {
    let four = T::cast(4.0);
    let disc = Complex::from_real(b * b - four * a * c).sqrt();
    let minus_b = Complex::from_real(-b);
    let two_a = a + a;
    [(minus_b + disc) / two_a, (minus_b - disc) / two_a]
}

//! Complex numbers at a build-selected precision.
//!
//! [`Complex`] is a plain two-field value: every operation takes its operands
//! by value and returns a new one. Arithmetic is written out by hand; the
//! transcendental functions go through [`num_complex`], and the two
//! representations convert losslessly into each other. The hand-written
//! `+ - * /` produce the same bits as `num_complex`'s operators.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex as NativeComplex;

use crate::precision::Real;

/// Complex value `re + j·im`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Complex<T> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

impl<T> Complex<T> {
    /// Create a complex value from its parts.
    #[must_use]
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

#[allow(clippy::should_implement_trait)]
impl<T: Real> Complex<T> {
    /// Create a complex value from a real one (imaginary part 0).
    #[must_use]
    #[inline]
    pub fn from_real(re: T) -> Self {
        Self::new(re, T::zero())
    }

    /// Create a complex value from magnitude and phase (radians).
    #[must_use]
    #[inline]
    pub fn from_polar(r: T, theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// `0 + 0j`
    #[must_use]
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `1 + 0j`
    #[must_use]
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// `0 + 1j`
    #[must_use]
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Real part.
    #[must_use]
    #[inline]
    pub fn real(self) -> T {
        self.re
    }

    /// Imaginary part.
    #[must_use]
    #[inline]
    pub fn imag(self) -> T {
        self.im
    }

    /// Component-wise sum.
    #[must_use]
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    /// Component-wise difference.
    #[must_use]
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    /// Complex product.
    #[must_use]
    #[inline]
    pub fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.im * other.re + self.re * other.im,
        )
    }

    /// Scale both parts by a real factor of the same precision.
    #[must_use]
    #[inline]
    pub fn mul_real(self, factor: T) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Complex quotient.
    ///
    /// No guard on a zero divisor: the IEEE result (`inf`/`NaN`) comes back.
    #[must_use]
    #[inline]
    pub fn div(self, other: Self) -> Self {
        let d = other.re * other.re + other.im * other.im;
        Self::new(
            (self.re * other.re + self.im * other.im) / d,
            (other.re * self.im - self.re * other.im) / d,
        )
    }

    /// Complex conjugate.
    #[must_use]
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Replace the value with the real number `re`, returning `(re, 0)`.
    #[must_use]
    #[inline]
    pub fn set_real(self, re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// `re² + im²`
    #[must_use]
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude, computed without intermediate overflow.
    #[must_use]
    #[inline]
    pub fn abs(self) -> T {
        self.re.hypot(self.im)
    }

    /// Phase angle in radians, in `[-π, π]`.
    #[must_use]
    #[inline]
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    /// `(abs, arg)`
    #[must_use]
    #[inline]
    pub fn to_polar(self) -> (T, T) {
        (self.abs(), self.arg())
    }

    /// Projection onto the Riemann sphere.
    ///
    /// Every value with an infinite part maps to `+inf ± 0j` (sign of the
    /// zero follows `im`); everything else is returned unchanged.
    #[must_use]
    pub fn proj(self) -> Self {
        if self.re.is_infinite() || self.im.is_infinite() {
            Self::new(T::infinity(), T::zero().copysign(self.im))
        } else {
            self
        }
    }

    /// `e^z`
    #[must_use]
    pub fn exp(self) -> Self {
        self.native().exp().into()
    }

    /// Natural logarithm (principal branch).
    #[must_use]
    pub fn ln(self) -> Self {
        self.native().ln().into()
    }

    /// Logarithm to a real base.
    #[must_use]
    pub fn log(self, base: T) -> Self {
        self.native().log(base).into()
    }

    /// Principal square root.
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.native().sqrt().into()
    }

    /// `self^exponent` for a complex exponent.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        self.native().powc(exponent.native()).into()
    }

    /// `self^exponent` for a real exponent.
    #[must_use]
    pub fn powf(self, exponent: T) -> Self {
        self.native().powf(exponent).into()
    }

    /// Sine.
    #[must_use]
    pub fn sin(self) -> Self {
        self.native().sin().into()
    }

    /// Cosine.
    #[must_use]
    pub fn cos(self) -> Self {
        self.native().cos().into()
    }

    /// Tangent.
    #[must_use]
    pub fn tan(self) -> Self {
        self.native().tan().into()
    }

    /// Inverse sine.
    #[must_use]
    pub fn asin(self) -> Self {
        self.native().asin().into()
    }

    /// Inverse cosine.
    #[must_use]
    pub fn acos(self) -> Self {
        self.native().acos().into()
    }

    /// Inverse tangent.
    #[must_use]
    pub fn atan(self) -> Self {
        self.native().atan().into()
    }

    /// Hyperbolic sine.
    #[must_use]
    pub fn sinh(self) -> Self {
        self.native().sinh().into()
    }

    /// Hyperbolic cosine.
    #[must_use]
    pub fn cosh(self) -> Self {
        self.native().cosh().into()
    }

    /// Hyperbolic tangent.
    #[must_use]
    pub fn tanh(self) -> Self {
        self.native().tanh().into()
    }

    /// Inverse hyperbolic sine.
    #[must_use]
    pub fn asinh(self) -> Self {
        self.native().asinh().into()
    }

    /// Inverse hyperbolic cosine.
    #[must_use]
    pub fn acosh(self) -> Self {
        self.native().acosh().into()
    }

    /// Inverse hyperbolic tangent.
    #[must_use]
    pub fn atanh(self) -> Self {
        self.native().atanh().into()
    }

    /// `true` if either part is NaN.
    #[must_use]
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// `true` if both parts are finite.
    #[must_use]
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    #[inline]
    fn native(self) -> NativeComplex<T> {
        NativeComplex::new(self.re, self.im)
    }
}

impl<T> From<NativeComplex<T>> for Complex<T> {
    #[inline]
    fn from(z: NativeComplex<T>) -> Self {
        Self::new(z.re, z.im)
    }
}

impl<T> From<Complex<T>> for NativeComplex<T> {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        NativeComplex::new(z.re, z.im)
    }
}

impl<T: Real> From<T> for Complex<T> {
    #[inline]
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Real> Add for Complex<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::add(self, other)
    }
}

impl<T: Real> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::sub(self, other)
    }
}

impl<T: Real> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::mul(self, other)
    }
}

impl<T: Real> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.mul_real(factor)
    }
}

impl<T: Real> Div for Complex<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::div(self, other)
    }
}

impl<T: Real> Div<T> for Complex<T> {
    type Output = Self;

    fn div(self, divisor: T) -> Self {
        Self::new(self.re / divisor, self.im / divisor)
    }
}

impl<T: Real> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T: Real> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}j", self.re, -self.im)
        } else {
            write!(f, "{}+{}j", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Float;

    #[test]
    fn test_multiply() {
        let a = Complex::new(1.0_f64, 2.0);
        let b = Complex::new(3.0, 4.0);
        // (1+2j)(3+4j) = 3 + 4j + 6j + 8j² = -5 + 10j
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_divide() {
        let a = Complex::new(-5.0_f64, 10.0);
        let b = Complex::new(3.0, 4.0);
        let q = a / b;
        assert!((q.re - 1.0).abs() < 1e-12);
        assert!((q.im - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        let q = Complex::new(1.0_f32, 1.0) / Complex::zero();
        assert!(q.is_nan(), "expected NaN, got {q:?}");
    }

    #[test]
    fn test_set_real_returns_new_value() {
        let a = Complex::new(3.0_f32, -4.0);
        let b = a.set_real(7.0);
        assert_eq!(b, Complex::new(7.0, 0.0));
        assert_eq!(a, Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_mul_real() {
        let a = Complex::new(1.5_f32, -2.0);
        assert_eq!(a.mul_real(2.0), Complex::new(3.0, -4.0));
        assert_eq!(a * 2.0_f32, a.mul_real(2.0));
    }

    #[test]
    fn test_polar() {
        let z = Complex::from_polar(2.0_f64, core::f64::consts::FRAC_PI_2);
        assert!(z.re.abs() < 1e-12);
        assert!((z.im - 2.0).abs() < 1e-12);
        let (r, theta) = z.to_polar();
        assert!((r - 2.0).abs() < 1e-12);
        assert!((theta - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_proj() {
        let finite = Complex::new(1.0_f64, -2.0);
        assert_eq!(finite.proj(), finite);

        let p = Complex::new(f64::NEG_INFINITY, -3.0).proj();
        assert_eq!(p.re, f64::INFINITY);
        assert_eq!(p.im, 0.0);
        assert!(p.im.is_sign_negative());

        let p = Complex::new(2.0_f64, f64::INFINITY).proj();
        assert_eq!(p.re, f64::INFINITY);
        assert!(p.im.is_sign_positive());
    }

    #[test]
    fn test_exp_ln() {
        let z = Complex::new(0.0_f64, core::f64::consts::PI).exp();
        assert!((z.re + 1.0).abs() < 1e-12);
        assert!(z.im.abs() < 1e-12);

        let w = Complex::new(-1.0_f64, 0.0).ln();
        assert!(w.re.abs() < 1e-12);
        assert!((w.im - core::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_sqrt_of_negative_real() {
        let z = Complex::from_real(-4.0_f64).sqrt();
        assert!(z.re.abs() < 1e-12);
        assert!((z.im - 2.0).abs() < 1e-12);
    }
}

//! Biquad Coefficient Design
//!
//! Closed-form second-order IIR coefficients from the audio-EQ cookbook
//! (bilinear transform of the analog prototypes). Frequencies are normalized
//! to Nyquist: `f0` in `(0, 1)`, so `w0 = π·f0`.
//!
//! # Supported Filter Types
//!
//! - Low-pass, high-pass
//! - Band-pass with constant skirt gain (peak gain = Q) or constant 0 dB peak
//! - Notch, all-pass
//! - Peaking EQ, low shelf, high shelf (linear gain, `A = √gain`)
//!
//! Nothing is validated: `q ≤ 0`, `f0` outside `(0, 1)` or `gain ≤ 0` for the
//! gain-bearing types produce IEEE special values or unstable coefficients.

use crate::precision::{Real, Scalar};

/// Biquad filter coefficients
///
/// Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
///
/// Every designer divides by the analog `a0`, so `a0` is implicitly 1 and
/// callers never normalize again.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BiquadCoeffs<T = Scalar> {
    /// Feedforward coefficients `[b0, b1, b2]`
    pub b: [T; 3],
    /// Feedback coefficients `[a1, a2]` (a0 is normalized to 1)
    pub a: [T; 2],
}

/// Quantities shared by every designer.
#[derive(Clone, Copy)]
struct Prototype<T> {
    sin: T,
    cos: T,
    alpha: T,
}

impl<T: Real> Prototype<T> {
    fn new(f0: T, q: T) -> Self {
        let w0 = T::PI() * f0;
        let (sin, cos) = (w0.sin(), w0.cos());
        Self {
            sin,
            cos,
            alpha: sin / (two::<T>() * q),
        }
    }
}

#[inline]
fn two<T: Real>() -> T {
    T::one() + T::one()
}

#[inline]
fn half<T: Real>() -> T {
    T::cast(0.5)
}

impl<T: Real> BiquadCoeffs<T> {
    /// Unity (pass-through) coefficients
    #[must_use]
    pub fn unity() -> Self {
        Self {
            b: [T::one(), T::zero(), T::zero()],
            a: [T::zero(), T::zero()],
        }
    }

    /// `b0`
    #[must_use]
    #[inline]
    pub fn b0(&self) -> T {
        self.b[0]
    }

    /// `b1`
    #[must_use]
    #[inline]
    pub fn b1(&self) -> T {
        self.b[1]
    }

    /// `b2`
    #[must_use]
    #[inline]
    pub fn b2(&self) -> T {
        self.b[2]
    }

    /// `a1`
    #[must_use]
    #[inline]
    pub fn a1(&self) -> T {
        self.a[0]
    }

    /// `a2`
    #[must_use]
    #[inline]
    pub fn a2(&self) -> T {
        self.a[1]
    }

    /// Design a low-pass filter: H(s) = 1 / (s² + s/Q + 1)
    ///
    /// # Arguments
    /// * `f0` - Cutoff frequency, normalized to Nyquist
    /// * `q` - Quality factor (1/√2 for Butterworth)
    #[must_use]
    pub fn lowpass(f0: T, q: T) -> Self {
        let Prototype { cos, alpha, .. } = Prototype::new(f0, q);
        let one = T::one();

        let b0 = (one - cos) * half();
        let b1 = one - cos;
        let b2 = b0;
        let a0 = one + alpha;
        let a1 = -two::<T>() * cos;
        let a2 = one - alpha;

        Self::normalize(b0, b1, b2, a0, a1, a2)
    }

    /// Design a high-pass filter: H(s) = s² / (s² + s/Q + 1)
    ///
    /// # Arguments
    /// * `f0` - Cutoff frequency, normalized to Nyquist
    /// * `q` - Quality factor (1/√2 for Butterworth)
    #[must_use]
    pub fn highpass(f0: T, q: T) -> Self {
        let Prototype { cos, alpha, .. } = Prototype::new(f0, q);
        let one = T::one();

        let b0 = (one + cos) * half();
        let b1 = -one - cos;
        let b2 = b0;
        let a0 = one + alpha;
        let a1 = -two::<T>() * cos;
        let a2 = one - alpha;

        Self::normalize(b0, b1, b2, a0, a1, a2)
    }

    /// Design a band-pass filter with constant skirt gain (peak gain = Q):
    /// H(s) = s / (s² + s/Q + 1)
    ///
    /// # Arguments
    /// * `f0` - Center frequency, normalized to Nyquist
    /// * `q` - Quality factor (bandwidth = f0/Q)
    #[must_use]
    pub fn bandpass_constant_skirt(f0: T, q: T) -> Self {
        let Prototype { sin, cos, alpha } = Prototype::new(f0, q);
        let one = T::one();
        let a0_inv = one / (one + alpha);

        let b0 = (sin * half()) * a0_inv;
        Self {
            b: [b0, T::zero(), -b0],
            a: [(-two::<T>() * cos) * a0_inv, (one - alpha) * a0_inv],
        }
    }

    /// Design a band-pass filter with constant 0 dB peak gain:
    /// H(s) = (s/Q) / (s² + s/Q + 1)
    ///
    /// # Arguments
    /// * `f0` - Center frequency, normalized to Nyquist
    /// * `q` - Quality factor (bandwidth = f0/Q)
    #[must_use]
    pub fn bandpass_constant_peak(f0: T, q: T) -> Self {
        let Prototype { cos, alpha, .. } = Prototype::new(f0, q);
        let one = T::one();
        let a0_inv = one / (one + alpha);

        let b0 = alpha * a0_inv;
        Self {
            b: [b0, T::zero(), -b0],
            a: [(-two::<T>() * cos) * a0_inv, (one - alpha) * a0_inv],
        }
    }

    /// Design a notch filter: H(s) = (s² + 1) / (s² + s/Q + 1)
    ///
    /// The prototype numerator has no odd term, so `b1` is exactly 0 and the
    /// numerator is `a0_inv·(1 + z⁻²)`.
    ///
    /// # Arguments
    /// * `f0` - Center frequency, normalized to Nyquist
    /// * `q` - Quality factor (higher = narrower notch)
    #[must_use]
    pub fn notch(f0: T, q: T) -> Self {
        let Prototype { cos, alpha, .. } = Prototype::new(f0, q);
        let one = T::one();
        let a0_inv = one / (one + alpha);

        Self {
            b: [a0_inv, T::zero(), a0_inv],
            a: [(-two::<T>() * cos) * a0_inv, (one - alpha) * a0_inv],
        }
    }

    /// Design an all-pass filter: H(s) = (s² − s/Q + 1) / (s² + s/Q + 1)
    ///
    /// The feedforward coefficients are the feedback ones reversed.
    ///
    /// # Arguments
    /// * `f0` - Frequency of the 180° phase shift, normalized to Nyquist
    /// * `q` - Quality factor
    #[must_use]
    pub fn allpass(f0: T, q: T) -> Self {
        let Prototype { cos, alpha, .. } = Prototype::new(f0, q);
        let one = T::one();

        let a0 = one + alpha;
        let a1 = -two::<T>() * cos;
        let a2 = one - alpha;

        Self::normalize(a2, a1, a0, a0, a1, a2)
    }

    /// Design a peaking EQ filter:
    /// H(s) = (s² + s·(A/Q) + 1) / (s² + s/(A·Q) + 1), with `A = √gain`
    ///
    /// # Arguments
    /// * `f0` - Center frequency, normalized to Nyquist
    /// * `q` - Quality factor
    /// * `gain` - Linear gain at the center frequency (> 0)
    #[must_use]
    pub fn peaking(f0: T, q: T, gain: T) -> Self {
        let g = gain.sqrt();
        let g_inv = T::one() / g;
        let Prototype { cos, alpha, .. } = Prototype::new(f0, q);
        let one = T::one();

        let b0 = one + alpha * g;
        let b1 = -two::<T>() * cos;
        let b2 = one - alpha * g;
        let a0 = one + alpha * g_inv;
        let a1 = b1;
        let a2 = one - alpha * g_inv;

        Self::normalize(b0, b1, b2, a0, a1, a2)
    }

    /// Design a low-shelf filter:
    /// H(s) = A·(s² + (√A/Q)·s + A) / (A·s² + (√A/Q)·s + 1), with `A = √gain`
    ///
    /// # Arguments
    /// * `f0` - Corner frequency, normalized to Nyquist
    /// * `q` - Quality factor (shelf slope)
    /// * `gain` - Linear shelf gain (> 0)
    #[must_use]
    pub fn lowshelf(f0: T, q: T, gain: T) -> Self {
        let g = gain.sqrt();
        let Prototype { sin, cos, .. } = Prototype::new(f0, q);
        let (one, two) = (T::one(), two::<T>());
        let beta = sin * g.sqrt() / q;

        let b0 = g * ((g + one) - (g - one) * cos + beta);
        let b1 = two * g * ((g - one) - (g + one) * cos);
        let b2 = g * ((g + one) - (g - one) * cos - beta);
        let a0 = (g + one) + (g - one) * cos + beta;
        let a1 = -two * ((g - one) + (g + one) * cos);
        let a2 = (g + one) + (g - one) * cos - beta;

        Self::normalize(b0, b1, b2, a0, a1, a2)
    }

    /// Design a high-shelf filter:
    /// H(s) = A·(A·s² + (√A/Q)·s + 1) / (s² + (√A/Q)·s + A), with `A = √gain`
    ///
    /// # Arguments
    /// * `f0` - Corner frequency, normalized to Nyquist
    /// * `q` - Quality factor (shelf slope)
    /// * `gain` - Linear shelf gain (> 0)
    #[must_use]
    pub fn highshelf(f0: T, q: T, gain: T) -> Self {
        let g = gain.sqrt();
        let Prototype { sin, cos, .. } = Prototype::new(f0, q);
        let (one, two) = (T::one(), two::<T>());
        let beta = sin * g.sqrt() / q;

        let b0 = g * ((g + one) + (g - one) * cos + beta);
        let b1 = -two * g * ((g - one) + (g + one) * cos);
        let b2 = g * ((g + one) + (g - one) * cos - beta);
        let a0 = (g + one) - (g - one) * cos + beta;
        let a1 = two * ((g - one) - (g + one) * cos);
        let a2 = (g + one) - (g - one) * cos - beta;

        Self::normalize(b0, b1, b2, a0, a1, a2)
    }

    /// Scale the feedforward coefficients by a linear gain.
    ///
    /// Feedback coefficients are untouched; `gain == 1` returns the
    /// coefficients unchanged.
    #[must_use]
    pub fn scaled(self, gain: T) -> Self {
        if gain == T::one() {
            return self;
        }
        Self {
            b: self.b.map(|b| b * gain),
            a: self.a,
        }
    }

    /// Normalize coefficients by a0
    fn normalize(b0: T, b1: T, b2: T, a0: T, a1: T, a2: T) -> Self {
        let a0_inv = T::one() / a0;
        Self {
            b: [b0 * a0_inv, b1 * a0_inv, b2 * a0_inv],
            a: [a1 * a0_inv, a2 * a0_inv],
        }
    }
}

impl<T: Real> Default for BiquadCoeffs<T> {
    fn default() -> Self {
        Self::unity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Float;

    const TOLERANCE: f64 = 1e-5;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn biquad_unity() {
        let coeffs = BiquadCoeffs::<f32>::unity();
        assert_eq!(coeffs.b, [1.0, 0.0, 0.0]);
        assert_eq!(coeffs.a, [0.0, 0.0]);
        assert_eq!(BiquadCoeffs::<f64>::default(), BiquadCoeffs::unity());
    }

    #[test]
    fn lowpass_butterworth_at_half_nyquist() {
        let c = BiquadCoeffs::<f64>::lowpass(0.5, 0.707_106_78);
        let a0_inv = 1.0 / (1.0 + 0.707_106_78);

        assert!(approx_eq(a0_inv, 0.585_79, TOLERANCE));
        assert!(approx_eq(c.a1(), 0.0, TOLERANCE), "a1: {}", c.a1());
        assert!(approx_eq(c.a2(), 0.171_57, TOLERANCE), "a2: {}", c.a2());
        assert!(approx_eq(c.b0(), 0.292_89, TOLERANCE), "b0: {}", c.b0());
        assert!(approx_eq(c.b1(), 0.585_79, TOLERANCE), "b1: {}", c.b1());
        assert_eq!(c.b2(), c.b0());
    }

    #[test]
    fn highpass_mirrors_lowpass_at_half_nyquist() {
        let lp = BiquadCoeffs::<f64>::lowpass(0.5, 0.707_106_78);
        let hp = BiquadCoeffs::<f64>::highpass(0.5, 0.707_106_78);

        assert!(approx_eq(hp.b0(), lp.b0(), 1e-12));
        assert!(approx_eq(hp.b1(), -lp.b1(), 1e-12));
        assert_eq!(hp.a, lp.a);
    }

    #[test]
    fn bandpass_variants_differ_by_q() {
        let q = 4.0;
        let skirt = BiquadCoeffs::<f64>::bandpass_constant_skirt(0.25, q);
        let peak = BiquadCoeffs::<f64>::bandpass_constant_peak(0.25, q);

        assert_eq!(skirt.b1(), 0.0);
        assert_eq!(peak.b1(), 0.0);
        assert_eq!(skirt.b2(), -skirt.b0());
        assert_eq!(peak.b2(), -peak.b0());
        assert!(approx_eq(skirt.b0() / peak.b0(), q, 1e-12));
        assert_eq!(skirt.a, peak.a);
    }

    #[test]
    fn notch_has_no_odd_feedforward_term() {
        for f0 in [0.1, 0.3, 0.5, 0.8] {
            let c = BiquadCoeffs::<f32>::notch(f0, 2.0);
            assert_eq!(c.b1().to_bits(), 0.0_f32.to_bits());
            assert_eq!(c.b0(), c.b2());
        }
    }

    #[test]
    fn allpass_reverses_feedback() {
        let c = BiquadCoeffs::<f64>::allpass(0.3, 0.9);
        assert_eq!(c.b0(), c.a2());
        assert_eq!(c.b1(), c.a1());
        assert!(approx_eq(c.b2(), 1.0, 1e-15));
    }

    #[test]
    fn peaking_shares_a1() {
        let c = BiquadCoeffs::<f64>::peaking(0.2, 1.5, 4.0);
        assert_eq!(c.b1(), c.a1());
    }

    #[test]
    fn shelves_unity_gain_is_identity_ratio() {
        for c in [
            BiquadCoeffs::<f64>::lowshelf(0.2, 0.707, 1.0),
            BiquadCoeffs::<f64>::highshelf(0.2, 0.707, 1.0),
        ] {
            assert!(approx_eq(c.b0(), 1.0, 1e-12), "b0: {}", c.b0());
            assert!(approx_eq(c.b1(), c.a1(), 1e-12));
            assert!(approx_eq(c.b2(), c.a2(), 1e-12));
        }
    }

    #[test]
    fn scaled_leaves_feedback_alone() {
        let c = BiquadCoeffs::<f32>::lowpass(0.3, 0.707);
        assert_eq!(c.scaled(1.0), c);

        let s = c.scaled(2.0);
        assert_eq!(s.a, c.a);
        for (scaled, base) in s.b.iter().zip(c.b.iter()) {
            assert_eq!(*scaled, base * 2.0);
        }
    }

    #[test]
    fn degenerate_frequency_zero() {
        let c = BiquadCoeffs::<f64>::lowpass(0.0, 0.707);
        assert_eq!(c.b, [0.0, 0.0, 0.0]);
        assert_eq!(c.a, [-2.0, 1.0]);
    }

    #[test]
    fn zero_q_is_not_finite() {
        let c = BiquadCoeffs::<f64>::lowpass(0.5, 0.0);
        assert!(c.a.iter().chain(c.b.iter()).any(|v| !v.is_finite()));
    }

    #[test]
    fn negative_gain_is_nan() {
        for c in [
            BiquadCoeffs::<f64>::peaking(0.2, 1.0, -1.0),
            BiquadCoeffs::<f64>::lowshelf(0.2, 1.0, -1.0),
            BiquadCoeffs::<f64>::highshelf(0.2, 1.0, -1.0),
        ] {
            assert!(c.b.iter().chain(c.a.iter()).all(|v| v.is_nan()), "{c:?}");
        }
    }
}

//! Runtime biquad sections driven by designed coefficients.

use heapless::Vec;

use crate::biquad::BiquadCoeffs;
use crate::precision::{Real, Scalar};

/// Biquad filter state (Direct Form I).
///
/// `y[n] = b0·x[n] + b1·x[n-1] + b2·x[n-2] - a1·y[n-1] - a2·y[n-2]`
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Biquad<T = Scalar> {
    coeffs: BiquadCoeffs<T>,
    x: [T; 2],
    y: [T; 2],
}

impl<T: Real> Biquad<T> {
    /// Create a new biquad filter with given coefficients.
    #[must_use]
    pub fn new(coeffs: BiquadCoeffs<T>) -> Self {
        Self {
            coeffs,
            x: [T::zero(); 2],
            y: [T::zero(); 2],
        }
    }

    /// Process a single sample.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        let BiquadCoeffs { b, a } = self.coeffs;
        let output = b[0] * input + b[1] * self.x[0] + b[2] * self.x[1]
            - a[0] * self.y[0]
            - a[1] * self.y[1];
        self.x = [input, self.x[0]];
        self.y = [output, self.y[0]];
        output
    }

    /// Filter a block of samples in place.
    pub fn process_block(&mut self, samples: &mut [T]) {
        for sample in samples {
            *sample = self.process(*sample);
        }
    }

    /// Reset filter state to zero.
    pub fn reset(&mut self) {
        self.x = [T::zero(); 2];
        self.y = [T::zero(); 2];
    }

    /// Update filter coefficients (keeps state for smooth transition).
    pub fn set_coeffs(&mut self, coeffs: BiquadCoeffs<T>) {
        self.coeffs = coeffs;
    }

    /// Current coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &BiquadCoeffs<T> {
        &self.coeffs
    }
}

impl<T: Real> Default for Biquad<T> {
    fn default() -> Self {
        Self::new(BiquadCoeffs::unity())
    }
}

impl<T: Real> From<BiquadCoeffs<T>> for Biquad<T> {
    fn from(coeffs: BiquadCoeffs<T>) -> Self {
        Self::new(coeffs)
    }
}

/// Up to `N` biquad sections run in series.
#[derive(Clone, Debug)]
pub struct BiquadCascade<T, const N: usize> {
    sections: Vec<Biquad<T>, N>,
}

impl<T: Real, const N: usize> BiquadCascade<T, N> {
    /// Create an empty cascade (a pass-through).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Append a section.
    ///
    /// # Errors
    /// Hands the coefficients back when all `N` slots are taken.
    pub fn push(&mut self, coeffs: BiquadCoeffs<T>) -> Result<(), BiquadCoeffs<T>> {
        self.sections
            .push(Biquad::new(coeffs))
            .map_err(|section| section.coeffs)
    }

    /// Process a single sample through every section.
    #[inline]
    pub fn process(&mut self, input: T) -> T {
        self.sections
            .iter_mut()
            .fold(input, |sample, section| section.process(sample))
    }

    /// Filter a block of samples in place.
    pub fn process_block(&mut self, samples: &mut [T]) {
        for sample in samples {
            *sample = self.process(*sample);
        }
    }

    /// Reset the state of every section.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// No sections yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in processing order.
    pub fn sections(&self) -> impl Iterator<Item = &Biquad<T>> {
        self.sections.iter()
    }

    /// Combined `|H(e^{jw})|`, the product of the section magnitudes.
    #[must_use]
    pub fn magnitude(&self, w: T) -> T {
        self.sections
            .iter()
            .fold(T::one(), |acc, section| acc * section.coeffs.magnitude(w))
    }
}

impl<T: Real, const N: usize> Default for BiquadCascade<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

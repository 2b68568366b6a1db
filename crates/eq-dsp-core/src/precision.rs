//! Build-time precision selection.
//!
//! The real-scalar precision is chosen once per compiled artifact by the
//! build script (Cargo features `single`, `double`, `extended`, or the
//! `EQ_DSP_PRECISION` environment variable) and surfaces here as [`Scalar`].
//! Complex values use the same precision unless `complex-*` features or
//! `EQ_DSP_COMPLEX_PRECISION` say otherwise.
//!
//! Every algorithm in this crate is generic over [`Real`], so the selection
//! only decides which instantiation the default aliases point at.

use core::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

use crate::complex::Complex;

/// Floating-point precision of a compiled artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Precision {
    /// IEEE binary32
    Single,
    /// IEEE binary64
    Double,
    /// Extended precision, realized with the widest binary type stable Rust
    /// offers (binary64)
    Extended,
}

impl Precision {
    /// Lowercase name, as accepted by `EQ_DSP_PRECISION`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Extended => "extended",
        }
    }

    /// Width in bits of the type that stores values of this precision.
    #[must_use]
    pub const fn storage_bits(self) -> u32 {
        match self {
            Self::Single => 32,
            Self::Double | Self::Extended => 64,
        }
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Real scalar usable by the designers and the complex primitive.
///
/// One trait stands in for the per-precision `sin`/`cos`/`sqrt`/complex-`exp`
/// entry points: the compiler resolves them for whichever type is
/// instantiated.
pub trait Real: Float + FloatConst + Default + Debug + Display + Send + Sync + 'static {
    /// Precision natively provided by this type.
    const NATIVE: Precision;

    /// Convert an `f64` literal to this precision (rounding to nearest).
    fn cast(value: f64) -> Self;

    /// Widen to `f64` for reporting.
    fn widen(self) -> f64;
}

impl Real for f32 {
    const NATIVE: Precision = Precision::Single;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn cast(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        <f64 as From<f32>>::from(self)
    }
}

impl Real for f64 {
    const NATIVE: Precision = Precision::Double;

    #[inline]
    fn cast(value: f64) -> Self {
        value
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

/// Real scalar type selected for this build.
#[cfg(eq_real = "single")]
pub type Scalar = f32;
/// Real scalar type selected for this build.
#[cfg(any(eq_real = "double", eq_real = "extended"))]
pub type Scalar = f64;

/// Precision selected for [`Scalar`].
#[cfg(eq_real = "single")]
pub const PRECISION: Precision = Precision::Single;
/// Precision selected for [`Scalar`].
#[cfg(eq_real = "double")]
pub const PRECISION: Precision = Precision::Double;
/// Precision selected for [`Scalar`].
#[cfg(eq_real = "extended")]
pub const PRECISION: Precision = Precision::Extended;

/// Component type of [`DefaultComplex`].
#[cfg(eq_complex = "single")]
pub type ComplexScalar = f32;
/// Component type of [`DefaultComplex`].
#[cfg(any(eq_complex = "double", eq_complex = "extended"))]
pub type ComplexScalar = f64;

/// Precision selected for [`ComplexScalar`].
#[cfg(eq_complex = "single")]
pub const COMPLEX_PRECISION: Precision = Precision::Single;
/// Precision selected for [`ComplexScalar`].
#[cfg(eq_complex = "double")]
pub const COMPLEX_PRECISION: Precision = Precision::Double;
/// Precision selected for [`ComplexScalar`].
#[cfg(eq_complex = "extended")]
pub const COMPLEX_PRECISION: Precision = Precision::Extended;

/// Complex value at the build-selected complex precision.
pub type DefaultComplex = Complex<ComplexScalar>;

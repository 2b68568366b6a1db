//! Audio EQ DSP Core Library
//!
//! Biquad coefficient design for real-time audio analysis, plus the complex
//! arithmetic used to evaluate the resulting responses. This crate is
//! `no_std` compatible for use in both embedded and host targets.
//!
//! The floating-point precision is fixed per build (see [`precision`]); every
//! algorithm is also generic over [`Real`] for callers that want to pick
//! explicitly.
//!
//! # Modules
//!
//! - [`precision`] - Build-time precision selection and the [`Real`] trait
//! - [`complex`] - Complex numbers: arithmetic, polar form, transcendentals
//! - [`biquad`] - Cookbook coefficient designers
//! - [`design`] - Filter-type dispatch: [`FilterType`], [`FilterSpec`]
//! - [`response`] - Frequency response, poles and zeros
//! - [`filter`] - Runtime Direct Form I sections and cascades

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod biquad;
pub mod complex;
pub mod design;
pub mod filter;
pub mod precision;
pub mod response;

// Re-export commonly used types
pub use biquad::BiquadCoeffs;
pub use complex::Complex;
pub use design::{design, FilterSpec, FilterType, ParseFilterTypeError};
pub use filter::{Biquad, BiquadCascade};
pub use precision::{
    ComplexScalar, DefaultComplex, Precision, Real, Scalar, COMPLEX_PRECISION, PRECISION,
};
pub use response::MAGNITUDE_FLOOR_DB;

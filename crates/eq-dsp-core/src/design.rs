//! Filter-type dispatch.
//!
//! [`FilterSpec::design`] is the one place that maps a [`FilterType`] to its
//! designer. Each match arm also decides how `gain` is applied: the six
//! constant-gain responses get a post-design feedforward scale, while
//! peaking and shelving fold `gain` into their own formulas.

use core::fmt;
use core::str::FromStr;

use heapless::String;

use crate::biquad::BiquadCoeffs;
use crate::precision::{Real, Scalar};

/// Second-order response shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterType {
    /// Low-pass
    Lowpass,
    /// High-pass
    Highpass,
    /// Band-pass, constant skirt gain (peak gain = Q)
    BandpassConstantSkirt,
    /// Band-pass, constant 0 dB peak gain
    BandpassConstantPeak,
    /// Notch (band-reject)
    Notch,
    /// All-pass
    Allpass,
    /// Peaking EQ
    Peaking,
    /// Low shelf
    Lowshelf,
    /// High shelf
    Highshelf,
}

impl FilterType {
    /// Every filter type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Lowpass,
        Self::Highpass,
        Self::BandpassConstantSkirt,
        Self::BandpassConstantPeak,
        Self::Notch,
        Self::Allpass,
        Self::Peaking,
        Self::Lowshelf,
        Self::Highshelf,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lowpass => "lowpass",
            Self::Highpass => "highpass",
            Self::BandpassConstantSkirt => "bandpass-skirt",
            Self::BandpassConstantPeak => "bandpass-peak",
            Self::Notch => "notch",
            Self::Allpass => "allpass",
            Self::Peaking => "peaking",
            Self::Lowshelf => "lowshelf",
            Self::Highshelf => "highshelf",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Longest rejected name kept by [`ParseFilterTypeError`].
const MAX_NAME_LEN: usize = 32;

/// Returned when a string names no filter type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter type `{name}`")]
pub struct ParseFilterTypeError {
    name: String<MAX_NAME_LEN>,
}

impl ParseFilterTypeError {
    fn new(input: &str) -> Self {
        let mut name = String::new();
        for ch in input.chars() {
            if name.push(ch).is_err() {
                break;
            }
        }
        Self { name }
    }

    /// The rejected input, truncated to 32 bytes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for FilterType {
    type Err = ParseFilterTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut folded: String<MAX_NAME_LEN> = String::new();
        for ch in s.trim().chars() {
            let ch = match ch {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            };
            folded.push(ch).map_err(|()| ParseFilterTypeError::new(s))?;
        }

        match folded.as_str() {
            "lowpass" | "low-pass" | "lpf" => Ok(Self::Lowpass),
            "highpass" | "high-pass" | "hpf" => Ok(Self::Highpass),
            "bandpass-skirt" | "bandpass-constant-skirt" | "bpf-skirt" => {
                Ok(Self::BandpassConstantSkirt)
            }
            "bandpass-peak" | "bandpass-constant-peak" | "bandpass" | "bpf" => {
                Ok(Self::BandpassConstantPeak)
            }
            "notch" | "band-reject" | "bandstop" => Ok(Self::Notch),
            "allpass" | "all-pass" | "apf" => Ok(Self::Allpass),
            "peaking" | "peak" | "peq" | "bell" => Ok(Self::Peaking),
            "lowshelf" | "low-shelf" => Ok(Self::Lowshelf),
            "highshelf" | "high-shelf" => Ok(Self::Highshelf),
            _ => Err(ParseFilterTypeError::new(s)),
        }
    }
}

/// Parameters of one design call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterSpec<T = Scalar> {
    /// Response shape
    pub filter_type: FilterType,
    /// Cutoff or center frequency, normalized to Nyquist (0 < f0 < 1)
    pub f0: T,
    /// Quality factor (> 0)
    pub q: T,
    /// Linear gain (> 0)
    pub gain: T,
}

impl<T: Real> FilterSpec<T> {
    /// Create a filter specification.
    #[must_use]
    pub fn new(filter_type: FilterType, f0: T, q: T, gain: T) -> Self {
        Self {
            filter_type,
            f0,
            q,
            gain,
        }
    }

    /// Create a filter specification from audio units.
    ///
    /// # Arguments
    /// * `freq_hz` - Cutoff or center frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    /// * `q` - Quality factor
    /// * `gain_db` - Gain in dB, converted to linear with `10^(dB/20)`
    #[must_use]
    pub fn from_audio(filter_type: FilterType, freq_hz: T, sample_rate: T, q: T, gain_db: T) -> Self {
        let nyquist = sample_rate / (T::one() + T::one());
        let gain = T::cast(10.0).powf(gain_db / T::cast(20.0));
        Self::new(filter_type, freq_hz / nyquist, q, gain)
    }

    /// Compute normalized coefficients for this specification.
    #[must_use]
    pub fn design(&self) -> BiquadCoeffs<T> {
        let Self { f0, q, gain, .. } = *self;
        match self.filter_type {
            FilterType::Lowpass => BiquadCoeffs::lowpass(f0, q).scaled(gain),
            FilterType::Highpass => BiquadCoeffs::highpass(f0, q).scaled(gain),
            FilterType::BandpassConstantSkirt => {
                BiquadCoeffs::bandpass_constant_skirt(f0, q).scaled(gain)
            }
            FilterType::BandpassConstantPeak => {
                BiquadCoeffs::bandpass_constant_peak(f0, q).scaled(gain)
            }
            FilterType::Notch => BiquadCoeffs::notch(f0, q).scaled(gain),
            FilterType::Allpass => BiquadCoeffs::allpass(f0, q).scaled(gain),
            FilterType::Peaking => BiquadCoeffs::peaking(f0, q, gain),
            FilterType::Lowshelf => BiquadCoeffs::lowshelf(f0, q, gain),
            FilterType::Highshelf => BiquadCoeffs::highshelf(f0, q, gain),
        }
    }

    /// Write normalized coefficients into caller-owned storage.
    pub fn design_into(&self, b: &mut [T; 3], a: &mut [T; 2]) {
        let coeffs = self.design();
        *b = coeffs.b;
        *a = coeffs.a;
    }
}

/// Design a biquad in place.
///
/// Writes `[b0, b1, b2]` into `b` and `[a1, a2]` into `a`, already divided by
/// `a0`. Invalid parameters are not reported; they show up as `inf`/`NaN`
/// in the output.
pub fn design<T: Real>(filter_type: FilterType, b: &mut [T; 3], a: &mut [T; 2], f0: T, q: T, gain: T) {
    FilterSpec::new(filter_type, f0, q, gain).design_into(b, a);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Float;

    #[test]
    fn names_round_trip() {
        for filter_type in FilterType::ALL {
            assert_eq!(filter_type.name().parse::<FilterType>(), Ok(filter_type));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!("LPF".parse(), Ok(FilterType::Lowpass));
        assert_eq!(" high_shelf ".parse(), Ok(FilterType::Highshelf));
        assert_eq!("bpf".parse(), Ok(FilterType::BandpassConstantPeak));
        assert_eq!("Band Reject".parse(), Ok(FilterType::Notch));
    }

    #[test]
    fn unknown_name_is_kept() {
        let err = "comb".parse::<FilterType>().unwrap_err();
        assert_eq!(err.name(), "comb");
    }

    #[test]
    fn overlong_name_is_truncated() {
        let input = "a-filter-type-name-well-beyond-any-real-one";
        let err = input.parse::<FilterType>().unwrap_err();
        assert_eq!(err.name(), &input[..MAX_NAME_LEN]);
    }

    #[test]
    fn gain_applies_only_to_feedforward() {
        let unity = FilterSpec::new(FilterType::Lowpass, 0.25_f64, 0.707, 1.0).design();
        let doubled = FilterSpec::new(FilterType::Lowpass, 0.25_f64, 0.707, 2.0).design();
        assert_eq!(doubled.a, unity.a);
        assert_eq!(doubled.b, unity.b.map(|b| b * 2.0));
    }

    #[test]
    fn gain_bearing_types_are_not_post_scaled() {
        let spec = FilterSpec::new(FilterType::Peaking, 0.25_f64, 1.0, 4.0);
        assert_eq!(spec.design(), BiquadCoeffs::peaking(0.25, 1.0, 4.0));
    }

    #[test]
    fn design_writes_in_place() {
        let mut b = [0.0_f32; 3];
        let mut a = [0.0_f32; 2];
        design(FilterType::Notch, &mut b, &mut a, 0.5, 2.0, 1.0);
        let expected = BiquadCoeffs::notch(0.5, 2.0);
        assert_eq!(b, expected.b);
        assert_eq!(a, expected.a);
    }

    #[test]
    fn from_audio_normalizes() {
        let spec = FilterSpec::<f64>::from_audio(FilterType::Peaking, 12_000.0, 48_000.0, 1.0, 20.0);
        assert!((spec.f0 - 0.5).abs() < 1e-12);
        assert!((spec.gain - 10.0).abs() < 1e-12);
    }
}

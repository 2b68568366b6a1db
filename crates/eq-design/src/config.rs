//! Command-line arguments and their validation.

use std::str::FromStr;

use clap::{ArgAction, Parser};
use eq_dsp_core::{FilterSpec, FilterType, Real, Scalar};
use tracing::debug;

use crate::error::{DesignError, Result};

/// Report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human-readable text
    Text,
    /// One pretty-printed JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(DesignError::UnknownFormat(s.to_string())),
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Design audio-EQ biquad coefficients", long_about = None)]
pub struct Args {
    /// Filter type (lowpass, highpass, bandpass-skirt, bandpass-peak, notch,
    /// allpass, peaking, lowshelf, highshelf)
    #[arg(short = 't', long = "type", value_parser = FilterType::from_str)]
    pub filter_type: FilterType,

    /// Cutoff or center frequency: Hz with --sample-rate, otherwise
    /// normalized to Nyquist (0 < f0 < 1)
    #[arg(short, long)]
    pub freq: f64,

    /// Sample rate in Hz
    #[arg(short, long, env = "EQ_SAMPLE_RATE")]
    pub sample_rate: Option<f64>,

    /// Quality factor
    #[arg(short, long, default_value_t = std::f64::consts::FRAC_1_SQRT_2)]
    pub q: f64,

    /// Linear gain
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "gain_db")]
    pub gain: Option<f64>,

    /// Gain in dB (peaking and shelving boost/cut)
    #[arg(long, allow_negative_numbers = true)]
    pub gain_db: Option<f64>,

    /// Number of magnitude-response points to report over [0, Nyquist]
    #[arg(long, default_value_t = 0)]
    pub sweep: usize,

    /// Output format (text, json)
    #[arg(long, default_value = "text", env = "EQ_FORMAT")]
    pub format: String,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validated design request.
#[derive(Debug, Clone)]
pub struct DesignConfig {
    /// Normalized parameters at the build-selected precision
    pub spec: FilterSpec<Scalar>,
    /// Sample rate, when the frequency was given in Hz
    pub sample_rate: Option<f64>,
    /// Sweep points (0 disables the sweep)
    pub sweep: usize,
    /// Report layout
    pub format: OutputFormat,
}

impl DesignConfig {
    /// Validate arguments and convert audio units to the designer's
    /// normalized parameters.
    ///
    /// # Errors
    /// Any argument the designer would turn into `inf`/`NaN` or an unstable
    /// filter is rejected here.
    pub fn from_args(args: &Args) -> Result<Self> {
        let format = args.format.parse()?;

        finite("freq", args.freq)?;
        finite("q", args.q)?;

        let f0 = match args.sample_rate {
            Some(rate) => {
                finite("sample rate", rate)?;
                if rate <= 0.0 {
                    return Err(DesignError::InvalidSampleRate(rate));
                }
                args.freq / (rate / 2.0)
            }
            None => args.freq,
        };
        if !(f0 > 0.0 && f0 < 1.0) {
            return Err(DesignError::FrequencyOutOfRange(f0));
        }

        if args.q <= 0.0 {
            return Err(DesignError::InvalidQ(args.q));
        }

        let gain = match (args.gain, args.gain_db) {
            (Some(gain), _) => finite("gain", gain)?,
            (None, Some(db)) => 10f64.powf(finite("gain-db", db)? / 20.0),
            (None, None) => 1.0,
        };
        if gain <= 0.0 {
            return Err(DesignError::InvalidGain(gain));
        }

        debug!(
            filter = %args.filter_type,
            f0,
            q = args.q,
            gain,
            "normalized design parameters"
        );

        Ok(Self {
            spec: FilterSpec::new(
                args.filter_type,
                Scalar::cast(f0),
                Scalar::cast(args.q),
                Scalar::cast(gain),
            ),
            sample_rate: args.sample_rate,
            sweep: args.sweep,
            format,
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DesignError::NonFinite { name, value })
    }
}

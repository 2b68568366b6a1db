//! Biquad designer for audio EQ work
//!
//! Validates user parameters, converts audio units (Hz, dB) into the
//! normalized ones the designer expects, and reports the coefficients together
//! with pole/zero analysis and an optional magnitude sweep.
//!
//! # Usage Examples
//!
//! ## Butterworth low-pass at 1 kHz, 48 kHz sample rate
//! ```bash
//! eq-design -t lowpass -f 1000 -s 48000
//! ```
//!
//! ## +6 dB peaking EQ, normalized frequency, JSON output
//! ```bash
//! eq-design -t peaking -f 0.25 -q 2 --gain-db 6 --format json
//! ```
//!
//! ## Low shelf with a 16-point magnitude sweep
//! ```bash
//! EQ_SAMPLE_RATE=44100 eq-design -t lowshelf -f 200 --gain-db -4 --sweep 16 -v
//! ```

mod config;
mod error;
mod report;

use std::process::ExitCode;

use clap::Parser;
use eq_dsp_core::{COMPLEX_PRECISION, PRECISION};
use tracing::{info, warn};

use config::{Args, DesignConfig, OutputFormat};
use error::Result;
use report::Report;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing with verbosity level
    // 0 = WARN (quiet), 1 = INFO, 2 = DEBUG, 3+ = TRACE
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = DesignConfig::from_args(args)?;
    info!(
        real = %PRECISION,
        complex = %COMPLEX_PRECISION,
        filter = %config.spec.filter_type,
        "designing"
    );

    let report = Report::new(&config);
    if !report.stable {
        warn!(poles = ?report.poles, "designed filter is not stable");
    }

    match config.format {
        OutputFormat::Text => print!("{}", report.text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

//! Design report: coefficients, pole/zero analysis and an optional sweep.

use std::fmt;

use eq_dsp_core::{BiquadCoeffs, Complex, Real, Scalar, PRECISION};
use serde::Serialize;

use crate::config::DesignConfig;
use crate::error::Result;

/// One point of the magnitude sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    /// Angular frequency in radians per sample
    pub w: f64,
    /// Frequency in Hz, when a sample rate was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq_hz: Option<f64>,
    /// `|H(e^{jw})|` in dB
    pub magnitude_db: f64,
}

/// Everything the tool reports about one design
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Canonical filter-type name
    pub filter_type: &'static str,
    /// Build-selected scalar precision
    pub precision: &'static str,
    /// Normalized frequency (0 < f0 < 1)
    pub f0: f64,
    /// Quality factor
    pub q: f64,
    /// Linear gain
    pub gain: f64,
    /// Sample rate in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<f64>,
    /// Feedforward `[b0, b1, b2]`
    pub b: [f64; 3],
    /// Feedback `[a1, a2]` (a0 = 1)
    pub a: [f64; 2],
    /// Poles as `[re, im]`
    pub poles: [[f64; 2]; 2],
    /// Zeros as `[re, im]`
    pub zeros: [[f64; 2]; 2],
    /// Both poles inside the unit circle
    pub stable: bool,
    /// Magnitude sweep over `[0, π]`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sweep: Vec<SweepPoint>,
}

impl Report {
    /// Run the design described by `config` and analyse the result.
    pub fn new(config: &DesignConfig) -> Self {
        let coeffs = config.spec.design();
        Self {
            filter_type: config.spec.filter_type.name(),
            precision: PRECISION.name(),
            f0: config.spec.f0.widen(),
            q: config.spec.q.widen(),
            gain: config.spec.gain.widen(),
            sample_rate: config.sample_rate,
            b: coeffs.b.map(Real::widen),
            a: coeffs.a.map(Real::widen),
            poles: coeffs.poles().map(pair),
            zeros: coeffs.zeros().map(pair),
            stable: coeffs.is_stable(),
            sweep: sweep(&coeffs, config.sweep, config.sample_rate),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable layout.
    pub fn text(&self) -> TextReport<'_> {
        TextReport(self)
    }
}

fn pair(z: Complex<Scalar>) -> [f64; 2] {
    [z.re.widen(), z.im.widen()]
}

fn sweep(coeffs: &BiquadCoeffs<Scalar>, points: usize, sample_rate: Option<f64>) -> Vec<SweepPoint> {
    let last = points.saturating_sub(1).max(1) as f64;
    (0..points)
        .map(|k| {
            let fraction = k as f64 / last;
            let w = std::f64::consts::PI * fraction;
            SweepPoint {
                w,
                freq_hz: sample_rate.map(|rate| fraction * rate / 2.0),
                magnitude_db: coeffs.magnitude_db(Scalar::cast(w)).widen(),
            }
        })
        .collect()
}

/// [`Report`] formatted as aligned text
pub struct TextReport<'a>(&'a Report);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "type       {}", r.filter_type)?;
        writeln!(f, "precision  {}", r.precision)?;
        match r.sample_rate {
            Some(rate) => writeln!(f, "f0         {:.6} ({:.2} Hz at {} Hz)", r.f0, r.f0 * rate / 2.0, rate)?,
            None => writeln!(f, "f0         {:.6}", r.f0)?,
        }
        writeln!(f, "q          {:.6}", r.q)?;
        writeln!(f, "gain       {:.6} ({:+.2} dB)", r.gain, 20.0 * r.gain.log10())?;
        writeln!(f, "b          [{:.9}, {:.9}, {:.9}]", r.b[0], r.b[1], r.b[2])?;
        writeln!(f, "a          [1, {:.9}, {:.9}]", r.a[0], r.a[1])?;
        for (label, roots) in [("poles", &r.poles), ("zeros", &r.zeros)] {
            writeln!(
                f,
                "{label:<10} {:.6}{:+.6}j, {:.6}{:+.6}j",
                roots[0][0], roots[0][1], roots[1][0], roots[1][1]
            )?;
        }
        writeln!(f, "stable     {}", if r.stable { "yes" } else { "no" })?;

        if !r.sweep.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:>10} {:>12} {:>10}", "w", "Hz", "dB")?;
            for point in &r.sweep {
                match point.freq_hz {
                    Some(hz) => writeln!(f, "{:>10.5} {:>12.2} {:>10.3}", point.w, hz, point.magnitude_db)?,
                    None => writeln!(f, "{:>10.5} {:>12} {:>10.3}", point.w, "-", point.magnitude_db)?,
                }
            }
        }
        Ok(())
    }
}

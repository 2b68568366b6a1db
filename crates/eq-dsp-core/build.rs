//! Build script for eq-dsp-core
//!
//! Resolves the scalar precision for this artifact and exposes it as the
//! `eq_real` and `eq_complex` cfg flags:
//! - `EQ_DSP_PRECISION` / `EQ_DSP_COMPLEX_PRECISION` environment overrides
//! - Cargo features `single`, `double`, `extended` (and `complex-*`)
//! - Fallback to single precision

use std::env;

const PRECISIONS: [&str; 3] = ["single", "double", "extended"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=EQ_DSP_PRECISION");
    println!("cargo:rerun-if-env-changed=EQ_DSP_COMPLEX_PRECISION");

    let values = PRECISIONS
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ");
    println!("cargo:rustc-check-cfg=cfg(eq_real, values({values}))");
    println!("cargo:rustc-check-cfg=cfg(eq_complex, values({values}))");

    let real = env_precision("EQ_DSP_PRECISION")
        .or_else(|| feature_precision(""))
        .unwrap_or("single");

    let complex = env_precision("EQ_DSP_COMPLEX_PRECISION")
        .or_else(|| feature_precision("COMPLEX_"))
        .unwrap_or(real);

    println!("cargo:rustc-cfg=eq_real=\"{real}\"");
    println!("cargo:rustc-cfg=eq_complex=\"{complex}\"");
}

/// Widest precision whose feature is enabled.
///
/// Cargo unifies features across the dependency graph, so more than one may
/// be on at once.
fn feature_precision(prefix: &str) -> Option<&'static str> {
    PRECISIONS.iter().rev().copied().find(|precision| {
        let var = format!("CARGO_FEATURE_{prefix}{}", precision.to_uppercase());
        env::var_os(var).is_some()
    })
}

fn env_precision(var: &str) -> Option<&'static str> {
    let value = env::var(var).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "single" | "float" | "f32" => Some("single"),
        "double" | "f64" => Some("double"),
        "extended" | "long-double" | "long_double" | "f80" => Some("extended"),
        "" => None,
        other => {
            println!("cargo:warning=ignoring unknown {var} value `{other}`");
            None
        }
    }
}

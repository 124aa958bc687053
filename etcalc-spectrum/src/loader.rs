//! One-time spectrum load

use std::path::Path;
use std::time::Instant;

use etcalc_units::{SpectrumError, VegaSpectrum};
use thiserror::Error;
use tracing::{debug, info};

use crate::VegaFluxFile;

/// Errors that can occur while loading a reference spectrum
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read spectrum file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse spectrum file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed spectrum file: {0}")]
    Format(String),

    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}

/// Load the reference spectrum from a JSON file.
///
/// This is the single suspending operation of the conversion subsystem;
/// call it once at startup and hand the result to
/// [`etcalc_units::UnitConverter::new`].
pub async fn load(path: impl AsRef<Path>) -> Result<VegaSpectrum, LoadError> {
    let path = path.as_ref();
    let started = Instant::now();

    let bytes = tokio::fs::read(path).await?;
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "read reference spectrum file"
    );

    let spectrum = from_json_str(std::str::from_utf8(&bytes).map_err(|e| {
        LoadError::Format(format!("spectrum file is not valid UTF-8: {}", e))
    })?)?;

    if let Some((lower, upper)) = spectrum.support() {
        info!(
            path = %path.display(),
            samples = spectrum.len(),
            support_lower_angstrom = lower,
            support_upper_angstrom = upper,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded reference spectrum"
        );
    }

    Ok(spectrum)
}

/// Parse a spectrum from already-fetched JSON (bundled or cached data)
pub fn from_json_str(json: &str) -> Result<VegaSpectrum, LoadError> {
    let file: VegaFluxFile = serde_json::from_str(json)?;
    file.into_spectrum()
}

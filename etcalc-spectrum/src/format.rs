//! On-disk spectrum format

use etcalc_units::VegaSpectrum;
use serde::Deserialize;

use crate::LoadError;

/// The bundled `vega_flux.json` shape: two parallel arrays, wavelengths in
/// Angstrom and fluxes in flam.
#[derive(Debug, Clone, Deserialize)]
pub struct VegaFluxFile {
    pub wavelength: Vec<f64>,
    pub flux: Vec<f64>,
}

impl VegaFluxFile {
    /// Zip the parallel arrays into a validated spectrum
    pub fn into_spectrum(self) -> Result<VegaSpectrum, LoadError> {
        if self.wavelength.len() != self.flux.len() {
            return Err(LoadError::Format(format!(
                "wavelength and flux arrays differ in length: {} vs {}",
                self.wavelength.len(),
                self.flux.len()
            )));
        }
        Ok(VegaSpectrum::from_pairs(
            self.wavelength.into_iter().zip(self.flux),
        )?)
    }
}

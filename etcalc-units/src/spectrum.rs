//! Reference spectrum interpolation for Vega-relative magnitudes
//!
//! The Vega magnitude scale is defined against the flux of Vega at the
//! same wavelength, so converting it requires a wavelength→flux table for
//! the reference star. The table is loaded once at startup by an external
//! collaborator (`etcalc-spectrum`) and is immutable afterwards; every
//! query here is a pure read.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::flux;

/// One sample of the reference spectrum: wavelength in Angstrom, flux in
/// flam (erg s⁻¹ cm⁻² Å⁻¹).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSample {
    pub wavelength: f64,
    pub flux: f64,
}

/// Errors detected when constructing a spectrum
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectrumError {
    #[error("spectrum sample {index} contains a non-finite value")]
    NonFinite { index: usize },

    #[error("spectrum wavelength {wavelength} at sample {index} is not positive")]
    NonPositiveWavelength { index: usize, wavelength: f64 },

    #[error("spectrum wavelengths must be strictly increasing (violated at sample {index})")]
    NotSorted { index: usize },
}

/// The reference (Vega) spectrum: an ordered wavelength→flux table.
///
/// Wavelengths are strictly increasing, which guarantees every bracketing
/// pair used for interpolation has distinct endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VegaSpectrum {
    samples: Vec<SpectrumSample>,
}

impl VegaSpectrum {
    /// Build a spectrum, validating the table once so queries never have to
    pub fn new(samples: Vec<SpectrumSample>) -> Result<Self, SpectrumError> {
        for (index, sample) in samples.iter().enumerate() {
            if !sample.wavelength.is_finite() || !sample.flux.is_finite() {
                return Err(SpectrumError::NonFinite { index });
            }
            if sample.wavelength <= 0.0 {
                return Err(SpectrumError::NonPositiveWavelength {
                    index,
                    wavelength: sample.wavelength,
                });
            }
        }
        if let Some(index) = (1..samples.len())
            .find(|&i| samples[i].wavelength <= samples[i - 1].wavelength)
        {
            return Err(SpectrumError::NotSorted { index });
        }
        Ok(VegaSpectrum { samples })
    }

    /// Build a spectrum from `(wavelength, flux)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SpectrumError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(wavelength, flux)| SpectrumSample { wavelength, flux })
                .collect(),
        )
    }

    /// A spectrum with no samples. Every query falls outside its support
    /// and resolves to the defined zero flux.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[SpectrumSample] {
        &self.samples
    }

    /// Unshifted wavelength support `(first, last)` in Angstrom
    pub fn support(&self) -> Option<(f64, f64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.wavelength, last.wavelength)),
            _ => None,
        }
    }

    /// Interpolated reference flux in photlam at `wavelength` Angstrom.
    ///
    /// Every table wavelength is stretched by `1 + redshift` before the
    /// bracket search. A query at or outside the stretched support returns
    /// 0.0; out-of-table flux is defined as zero, not an error. Interior
    /// queries linearly interpolate the bracketing flam samples and convert
    /// the result to photlam at the query wavelength.
    pub fn flux_at(&self, wavelength: f64, redshift: f64) -> f64 {
        let stretch = 1.0 + redshift;

        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        if wavelength <= first.wavelength * stretch || wavelength >= last.wavelength * stretch {
            return 0.0;
        }

        // Bracket: adjusted[idx-1] <= wavelength < adjusted[idx]. The
        // boundary checks above pin idx to [1, len-1], and strictly
        // increasing wavelengths keep the denominator non-zero.
        let idx = self
            .samples
            .partition_point(|s| s.wavelength * stretch <= wavelength);
        let before = &self.samples[idx - 1];
        let after = &self.samples[idx];

        let lower = before.wavelength * stretch;
        let upper = after.wavelength * stretch;
        let percent = (wavelength - lower) / (upper - lower);
        let flam = before.flux + percent * (after.flux - before.flux);

        // Magnitude formulas operate in photlam, so convert before returning
        flux::FLAM_TO_PHOTLAM * flam * wavelength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_spectrum() -> VegaSpectrum {
        VegaSpectrum::from_pairs([
            (3000.0, 6.0e-9),
            (5000.0, 4.0e-9),
            (7000.0, 2.0e-9),
            (9000.0, 1.0e-9),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_unsorted() {
        let err = VegaSpectrum::from_pairs([(3000.0, 1.0), (3000.0, 2.0)]).unwrap_err();
        assert_eq!(err, SpectrumError::NotSorted { index: 1 });

        let err = VegaSpectrum::from_pairs([(5000.0, 1.0), (3000.0, 2.0)]).unwrap_err();
        assert_eq!(err, SpectrumError::NotSorted { index: 1 });
    }

    #[test]
    fn test_rejects_bad_samples() {
        let err = VegaSpectrum::from_pairs([(3000.0, f64::NAN)]).unwrap_err();
        assert_eq!(err, SpectrumError::NonFinite { index: 0 });

        let err = VegaSpectrum::from_pairs([(0.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            SpectrumError::NonPositiveWavelength {
                index: 0,
                wavelength: 0.0
            }
        );
    }

    #[test]
    fn test_out_of_support_is_zero() {
        let spectrum = sample_spectrum();
        assert_eq!(spectrum.flux_at(1000.0, 0.0), 0.0);
        assert_eq!(spectrum.flux_at(15000.0, 0.0), 0.0);
        // Exactly on the endpoints counts as outside
        assert_eq!(spectrum.flux_at(3000.0, 0.0), 0.0);
        assert_eq!(spectrum.flux_at(9000.0, 0.0), 0.0);
    }

    #[test]
    fn test_empty_spectrum_is_zero_everywhere() {
        let spectrum = VegaSpectrum::empty();
        assert!(spectrum.is_empty());
        assert_eq!(spectrum.support(), None);
        assert_eq!(spectrum.flux_at(5000.0, 0.0), 0.0);
    }

    #[test]
    fn test_interior_interpolation() {
        let spectrum = sample_spectrum();

        // Midpoint of the 5000..7000 bracket in flam, converted to photlam
        // at the query wavelength
        let expected_flam = 3.0e-9;
        let got = spectrum.flux_at(6000.0, 0.0);
        assert_relative_eq!(got, flux::FLAM_TO_PHOTLAM * expected_flam * 6000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_interpolation_stays_between_brackets() {
        let spectrum = sample_spectrum();
        for wavelength in [3100.0, 4500.0, 5555.0, 6999.0, 8000.0] {
            let flam = spectrum.flux_at(wavelength, 0.0) / (flux::FLAM_TO_PHOTLAM * wavelength);
            let (lo, hi) = (1.0e-9, 6.0e-9);
            assert!(flam > lo && flam < hi, "flam {} out of bounds at {}", flam, wavelength);
        }
    }

    #[test]
    fn test_interpolation_at_sample_wavelength() {
        let spectrum = sample_spectrum();
        let flam = spectrum.flux_at(5000.0, 0.0) / (flux::FLAM_TO_PHOTLAM * 5000.0);
        assert_relative_eq!(flam, 4.0e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_redshift_stretches_support() {
        let spectrum = sample_spectrum();

        // Just inside the unshifted support, outside once stretched
        assert!(spectrum.flux_at(3100.0, 0.0) > 0.0);
        assert_eq!(spectrum.flux_at(3100.0, 0.1), 0.0);

        // The upper edge moves right by the same factor
        assert_eq!(spectrum.flux_at(9500.0, 0.0), 0.0);
        assert!(spectrum.flux_at(9500.0, 0.1) > 0.0);
    }

    #[test]
    fn test_redshift_scales_effective_wavelengths() {
        let spectrum = sample_spectrum();
        let z = 0.25;

        // Querying the stretched table at w*(1+z) lands in the same bracket
        // with the same interpolation fraction, so only the final flam →
        // photlam factor (proportional to the query wavelength) differs.
        for w in [4000.0, 5500.0, 6500.0, 8000.0] {
            let unshifted = spectrum.flux_at(w, 0.0);
            let shifted = spectrum.flux_at(w * (1.0 + z), z);
            assert_relative_eq!(shifted, unshifted * (1.0 + z), max_relative = 1e-12);
        }
    }
}

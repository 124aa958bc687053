//! The conversion entry point
//!
//! `UnitConverter::convert` is the single call the calculator GUI makes.
//! Control flow: classify both tokens into one domain, resolve the input
//! value, short-circuit identity, then dispatch to the per-domain rule.

use crate::{ConvertError, UnitKind, VegaSpectrum, UNITS};

/// Kelvin's affine parameters, the only valid pivot for two-phase
/// temperature conversions
const KELVIN: (f64, f64) = (1.0, 0.0);

/// A caller-supplied value: already numeric, or text still to be parsed.
///
/// Text that does not parse as a float resolves the conversion to `None`
/// rather than an error, so UI code can tell an empty field apart from a
/// failed conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Float(f64),
    Text(String),
}

impl Numeric {
    /// The numeric value, or `None` for unparseable text and NaN
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Float(v) => (!v.is_nan()).then_some(*v),
            Numeric::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        }
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Float(v)
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl From<String> for Numeric {
    fn from(s: String) -> Self {
        Numeric::Text(s)
    }
}

/// Ambient parameters for flux-domain conversions.
///
/// The wavelength is mandatory for any flux conversion and may carry a
/// length-unit suffix (`"500 nm"`); bare numbers are taken as Angstrom.
/// The redshift stretches the reference spectrum's wavelength axis and is
/// always passed explicitly here, never read from shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionContext {
    wavelength: Option<Numeric>,
    redshift: f64,
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the wavelength (Angstrom, or text with a length suffix)
    pub fn with_wavelength(mut self, wavelength: impl Into<Numeric>) -> Self {
        self.wavelength = Some(wavelength.into());
        self
    }

    /// Builder: set the redshift applied to the reference spectrum (z ≥ 0)
    pub fn with_redshift(mut self, redshift: f64) -> Self {
        self.redshift = redshift;
        self
    }

    pub fn redshift(&self) -> f64 {
        self.redshift
    }
}

/// The conversion engine.
///
/// Holds the reference spectrum needed by Vega-relative magnitudes; all
/// other conversions read only the static unit catalog. Construct it once
/// the spectrum load has completed; every call afterwards is a pure read.
#[derive(Debug, Clone, Default)]
pub struct UnitConverter {
    spectrum: VegaSpectrum,
}

impl UnitConverter {
    pub fn new(spectrum: VegaSpectrum) -> Self {
        UnitConverter { spectrum }
    }

    pub fn spectrum(&self) -> &VegaSpectrum {
        &self.spectrum
    }

    /// Convert `value` from `unit_from` to `unit_to`.
    ///
    /// Returns `Ok(None)` when the value is not a number, `Ok(Some(_))`
    /// with the converted value otherwise. Fails with
    /// [`ConvertError::DomainMismatch`] when the tokens do not share a
    /// domain and [`ConvertError::MissingWavelength`] when a flux
    /// conversion lacks a usable context wavelength.
    pub fn convert(
        &self,
        value: impl Into<Numeric>,
        unit_from: &str,
        unit_to: &str,
        ctx: &ConversionContext,
    ) -> Result<Option<f64>, ConvertError> {
        // Unknown or mismatched tokens fail even for unparseable values
        let (from, to) = UNITS.pair(unit_from, unit_to)?;

        let Some(value) = value.into().as_f64() else {
            return Ok(None);
        };

        // Same unit after case folding: return the input bit-exact instead
        // of accumulating floating-point drift through a no-op
        if unit_from.trim().eq_ignore_ascii_case(unit_to.trim()) {
            return Ok(Some(value));
        }

        match (&from.kind, &to.kind) {
            (UnitKind::Scale(scale_from), UnitKind::Scale(scale_to)) => {
                Ok(Some(value * scale_from / scale_to))
            }
            (
                UnitKind::Affine { scale: scale_from, offset: offset_from },
                UnitKind::Affine { scale: scale_to, offset: offset_to },
            ) => Ok(Some(convert_temperature(
                value,
                (*scale_from, *offset_from),
                (*scale_to, *offset_to),
                from.is_kelvin() || to.is_kelvin(),
            ))),
            (UnitKind::Flux(flux_from), UnitKind::Flux(flux_to)) => {
                let wavelength = self.resolve_wavelength(ctx)?;
                let photlam =
                    flux_from.to_photlam(value, wavelength, &self.spectrum, ctx.redshift);
                Ok(Some(flux_to.from_photlam(
                    photlam,
                    wavelength,
                    &self.spectrum,
                    ctx.redshift,
                )))
            }
            // The catalog never mixes kinds within a domain
            _ => Err(ConvertError::DomainMismatch {
                from: unit_from.to_string(),
                to: unit_to.to_string(),
            }),
        }
    }

    /// Resolve the context wavelength to Angstrom.
    ///
    /// Missing, non-positive, or unparseable wavelengths fail with
    /// [`ConvertError::MissingWavelength`]; a parseable value with a suffix
    /// that is not a length unit propagates the suffix conversion's error.
    fn resolve_wavelength(&self, ctx: &ConversionContext) -> Result<f64, ConvertError> {
        let raw = ctx
            .wavelength
            .as_ref()
            .ok_or(ConvertError::MissingWavelength)?;

        let angstrom = match raw {
            Numeric::Float(w) => *w,
            Numeric::Text(s) => match s.trim().parse::<f64>() {
                Ok(w) => w,
                Err(_) => {
                    let (number, suffix) =
                        split_suffix(s).ok_or(ConvertError::MissingWavelength)?;
                    self.convert(number, suffix, "angstrom", &ConversionContext::new())?
                        .ok_or(ConvertError::MissingWavelength)?
                }
            },
        };

        if angstrom.is_finite() && angstrom > 0.0 {
            Ok(angstrom)
        } else {
            Err(ConvertError::MissingWavelength)
        }
    }
}

/// Temperature conversion, pivoted through Kelvin.
///
/// When either endpoint is Kelvin a single affine step suffices; otherwise
/// the conversion runs source→Kelvin then Kelvin→target as two explicit
/// steps of the same formula.
fn convert_temperature(value: f64, from: (f64, f64), to: (f64, f64), direct: bool) -> f64 {
    if direct {
        affine_step(value, from, to)
    } else {
        let kelvin = affine_step(value, from, KELVIN);
        affine_step(kelvin, KELVIN, to)
    }
}

fn affine_step(value: f64, (scale_from, offset_from): (f64, f64), (scale_to, offset_to): (f64, f64)) -> f64 {
    (value + offset_from) * scale_to / scale_from - offset_to
}

/// Split `"500 nm"` / `"500nm"` into the number and its unit suffix
fn split_suffix(s: &str) -> Option<(f64, &str)> {
    let s = s.trim();
    if let Some((number, suffix)) = s.split_once(char::is_whitespace) {
        return Some((number.trim().parse().ok()?, suffix.trim()));
    }
    let at = s.find(|c: char| c.is_alphabetic() || c == '"' || c == '\'')?;
    let number = s[..at].trim().parse().ok()?;
    Some((number, s[at..].trim()))
}

//! Etcalc Units - Unit and Photometric-Flux Conversion
//!
//! Conversion engine for the exposure-time calculator. Converts a numeric
//! value between two unit tokens after classifying both into a single
//! physical domain.
//!
//! Domains:
//! - Length (angstrom, nm, um, mm, cm, m, km) - base meter
//! - Angle (marcsec, arcsec, arcmin, degree, radian) - base arcsecond
//! - Time (ns, us, ms, s, min, hr, day) - base second
//! - Temperature (K, C, F, R) - base Kelvin, affine
//! - Flux (flam, jy, photlam, AB/ST/Vega magnitudes) - base photlam
//!
//! Flux conversions need a wavelength in the conversion context, and the
//! Vega magnitude scale additionally needs a reference spectrum that is
//! interpolated (and optionally redshift-stretched) at that wavelength.
//! The engine itself is synchronous and side-effect-free; loading the
//! reference spectrum is a collaborator's concern (see `etcalc-spectrum`).

mod domain;
mod unit;
mod units;
mod spectrum;
mod flux;
mod convert;
mod error;

pub use domain::Domain;
pub use unit::{Unit, UnitKind};
pub use units::{UnitRegistry, UNITS};
pub use spectrum::{SpectrumSample, SpectrumError, VegaSpectrum};
pub use flux::FluxScale;
pub use convert::{ConversionContext, Numeric, UnitConverter};
pub use error::ConvertError;

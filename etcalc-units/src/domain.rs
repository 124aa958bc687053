//! Physical domains recognized by the unit catalog

use std::fmt;
use serde::{Serialize, Deserialize};

/// The physical domain a unit token belongs to.
///
/// Every token in the registry belongs to exactly one domain; a conversion
/// is only defined between two tokens of the same domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Linear, base unit meter
    Length,
    /// Linear, base unit arcsecond
    Angle,
    /// Linear, base unit second
    Time,
    /// Affine, base unit Kelvin
    Temperature,
    /// Non-linear, base unit photlam (photon flux density per wavelength)
    Flux,
}

impl Domain {
    /// Name used in error messages and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Length => "length",
            Domain::Angle => "angle",
            Domain::Time => "time",
            Domain::Temperature => "temperature",
            Domain::Flux => "flux",
        }
    }

    /// Domains converted by a pure scale factor
    pub fn is_linear(&self) -> bool {
        matches!(self, Domain::Length | Domain::Angle | Domain::Time)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

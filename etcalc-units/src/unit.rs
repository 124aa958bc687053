//! Unit representation with per-domain conversion data

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::{Domain, FluxScale};

/// How a unit converts to and from its domain's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnitKind {
    /// Multiplier converting 1 of this unit into the domain base unit
    Scale(f64),
    /// Affine temperature conversion: Kelvin = (value + offset) / scale
    Affine { scale: f64, offset: f64 },
    /// Photometric flux-density scale, converted through photlam
    Flux(FluxScale),
}

/// A registered unit: canonical symbol, human name, domain, and the data
/// needed to convert it to the domain base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Canonical lowercase symbol (e.g. "nm", "arcsec", "mag(vega)")
    pub symbol: String,
    /// The unit name (e.g. "nanometer", "arcsecond", "Vega magnitude")
    pub name: String,
    /// The domain this unit belongs to
    pub domain: Domain,
    /// Conversion data for this unit
    pub kind: UnitKind,
}

impl Unit {
    /// Create a linear unit with a scale factor to the domain base unit
    pub fn scaled(symbol: &str, name: &str, domain: Domain, factor: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            domain,
            kind: UnitKind::Scale(factor),
        }
    }

    /// Create an affine temperature unit
    pub fn affine(symbol: &str, name: &str, scale: f64, offset: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            domain: Domain::Temperature,
            kind: UnitKind::Affine { scale, offset },
        }
    }

    /// Create a flux-density unit
    pub fn flux(symbol: &str, name: &str, scale: FluxScale) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            domain: Domain::Flux,
            kind: UnitKind::Flux(scale),
        }
    }

    /// Whether this is the Kelvin pivot of the temperature domain
    pub fn is_kelvin(&self) -> bool {
        self.domain == Domain::Temperature && self.symbol == "k"
    }

    /// Check if two units share a domain (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.domain == other.domain
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

//! Unit catalog - the fixed set of tokens the calculator understands

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{ConvertError, Domain, FluxScale, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units.
///
/// Lookup is case-insensitive and alias-aware. Construction guarantees that
/// every token (canonical or alias) resolves to exactly one domain, so
/// domain classification reduces to two lookups.
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias, case-insensitively
    pub fn get(&self, token: &str) -> Option<&Unit> {
        let token = token.trim().to_lowercase();
        if let Some(unit) = self.units.get(&token) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(&token) {
            return self.units.get(canonical);
        }
        None
    }

    /// Resolve both endpoints of a conversion.
    ///
    /// Fails with [`ConvertError::DomainMismatch`] unless both tokens are
    /// registered and share a single domain.
    pub fn pair(&self, unit_from: &str, unit_to: &str) -> Result<(&Unit, &Unit), ConvertError> {
        match (self.get(unit_from), self.get(unit_to)) {
            (Some(from), Some(to)) if from.domain == to.domain => Ok((from, to)),
            _ => Err(ConvertError::DomainMismatch {
                from: unit_from.to_string(),
                to: unit_to.to_string(),
            }),
        }
    }

    /// Determine the single domain both tokens belong to
    pub fn classify(&self, unit_from: &str, unit_to: &str) -> Result<Domain, ConvertError> {
        let (from, _) = self.pair(unit_from, unit_to)?;
        Ok(from.domain)
    }

    /// All registered tokens (canonical symbols and aliases)
    pub fn tokens(&self) -> Vec<&str> {
        self.units
            .keys()
            .chain(self.aliases.keys())
            .map(|s| s.as_str())
            .collect()
    }

    /// All units in a domain
    pub fn by_domain(&self, domain: Domain) -> Vec<&Unit> {
        self.units.values().filter(|u| u.domain == domain).collect()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_angle_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_flux_units();
    }

    fn register_length_units(&mut self) {
        // Base unit: meter
        self.register(Unit::scaled("angstrom", "Angstrom", Domain::Length, 1e-10));
        self.register(Unit::scaled("nm", "nanometer", Domain::Length, 1e-9));
        self.register(Unit::scaled("um", "micrometer", Domain::Length, 1e-6));
        self.register(Unit::scaled("mm", "millimeter", Domain::Length, 1e-3));
        self.register(Unit::scaled("cm", "centimeter", Domain::Length, 1e-2));
        self.register(Unit::scaled("m", "meter", Domain::Length, 1.0));
        self.register(Unit::scaled("km", "kilometer", Domain::Length, 1e3));

        self.alias("nanometer", "nm");
        self.alias("micrometer", "um");
        self.alias("micron", "um");
        self.alias("millimeter", "mm");
        self.alias("centimeter", "cm");
        self.alias("meter", "m");
        self.alias("kilometer", "km");
    }

    fn register_angle_units(&mut self) {
        // Base unit: arcsecond
        self.register(Unit::scaled("marcsec", "milliarcsecond", Domain::Angle, 1e-3));
        self.register(Unit::scaled("arcsec", "arcsecond", Domain::Angle, 1.0));
        self.register(Unit::scaled("arcmin", "arcminute", Domain::Angle, 60.0));
        self.register(Unit::scaled("degree", "degree", Domain::Angle, 3600.0));
        self.register(Unit::scaled("radian", "radian", Domain::Angle, 206265.0));

        self.alias("milliarcsec", "marcsec");
        self.alias("\"", "arcsec");
        self.alias("'", "arcmin");
    }

    fn register_time_units(&mut self) {
        // Base unit: second
        self.register(Unit::scaled("ns", "nanosecond", Domain::Time, 1e-9));
        self.register(Unit::scaled("us", "microsecond", Domain::Time, 1e-6));
        self.register(Unit::scaled("ms", "millisecond", Domain::Time, 1e-3));
        self.register(Unit::scaled("s", "second", Domain::Time, 1.0));
        self.register(Unit::scaled("min", "minute", Domain::Time, 60.0));
        self.register(Unit::scaled("hr", "hour", Domain::Time, 3600.0));
        self.register(Unit::scaled("day", "day", Domain::Time, 86400.0));

        self.alias("minute", "min");
        self.alias("hour", "hr");
    }

    fn register_temperature_units(&mut self) {
        // Base unit: Kelvin. Kelvin = (value + offset) / scale.
        self.register(Unit::affine("k", "Kelvin", 1.0, 0.0));
        self.register(Unit::affine("c", "Celsius", 1.0, 273.15));
        self.register(Unit::affine("f", "Fahrenheit", 1.8, 459.67));
        self.register(Unit::affine("r", "Rankine", 1.8, 0.0));

        self.alias("kelvin", "k");
        self.alias("celsius", "c");
        self.alias("fahrenheit", "f");
        self.alias("rankine", "r");
    }

    fn register_flux_units(&mut self) {
        // Base unit: photlam (photons s⁻¹ cm⁻² Å⁻¹)
        self.register(Unit::flux("photlam", "photon flux density", FluxScale::Photlam));
        self.register(Unit::flux("flam", "energy flux density", FluxScale::Flam));
        self.register(Unit::flux("jy", "Jansky", FluxScale::Jansky));
        self.register(Unit::flux("mag(ab)", "AB magnitude", FluxScale::AbMag));
        self.register(Unit::flux("mag(st)", "ST magnitude", FluxScale::StMag));
        self.register(Unit::flux("mag(vega)", "Vega magnitude", FluxScale::VegaMag));

        self.alias("jansky", "jy");
        self.alias("abmag", "mag(ab)");
        self.alias("stmag", "mag(st)");
        self.alias("vegamag", "mag(vega)");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

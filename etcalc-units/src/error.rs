//! Error taxonomy for conversions
//!
//! Only the two fatal conditions are errors. Non-numeric input resolves to
//! `None` rather than an error so callers can tell an empty field apart from
//! a bad conversion, and a wavelength outside the reference spectrum's
//! support resolves to a defined zero flux.

use thiserror::Error;

/// Error type for unit conversions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The two unit tokens are not registered in a common domain
    #[error("cannot convert from '{from}' to '{to}'")]
    DomainMismatch { from: String, to: String },

    /// A flux-density conversion was requested without a usable wavelength
    #[error("flux density conversions require a wavelength in Angstroms")]
    MissingWavelength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConvertError::DomainMismatch {
            from: "nm".to_string(),
            to: "kelvin".to_string(),
        };
        assert_eq!(format!("{}", err), "cannot convert from 'nm' to 'kelvin'");
        assert_eq!(
            format!("{}", ConvertError::MissingWavelength),
            "flux density conversions require a wavelength in Angstroms"
        );
    }
}

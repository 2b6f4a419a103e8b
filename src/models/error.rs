//! Validation errors for IPv4 address input.

use thiserror::Error;

/// Why an input string was rejected during construction.
///
/// Each kind carries the specific message the original program raised
/// internally. At the CLI boundary everything collapses to one generic
/// message, see [`AddressError::collapsed`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// Address part does not split into exactly 4 decimal dot-fields.
    #[error("Neplatný formát IP adresy.")]
    InvalidFormat,
    /// An octet field is outside 0-255.
    #[error("Oktet IP adresy musí být mezi 0 a 255.")]
    OctetOutOfRange,
    /// Explicit prefix is non-numeric or outside 0-32.
    #[error("Neplatná délka prefixu.")]
    InvalidPrefix,
    /// No explicit prefix and the first octet falls outside classes A, B, C.
    #[error("Nepodporovaná IP adresa. Podporované jsou třídy A, B, C.")]
    UnsupportedAddressClass,
}

impl AddressError {
    /// The single user-facing message every validation failure maps to.
    pub fn collapsed(&self) -> &'static str {
        "Neplatná IPv4 adresa."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_is_uniform() {
        let kinds = [
            AddressError::InvalidFormat,
            AddressError::OctetOutOfRange,
            AddressError::InvalidPrefix,
            AddressError::UnsupportedAddressClass,
        ];
        for kind in kinds {
            assert_eq!(kind.collapsed(), "Neplatná IPv4 adresa.");
        }
    }

    #[test]
    fn test_specific_messages_differ() {
        assert_ne!(
            AddressError::InvalidFormat.to_string(),
            AddressError::InvalidPrefix.to_string()
        );
        assert_eq!(
            AddressError::OctetOutOfRange.to_string(),
            "Oktet IP adresy musí být mezi 0 a 255."
        );
    }
}

//! Cookie consent state.
//!
//! Consent is persisted in local storage under a single key; any stored
//! value that parses means the banner stays hidden.

/// Local storage key for the consent decision.
pub const STORAGE_KEY: &str = "cookieConsent";

/// The user's cookie consent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    /// The persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Parse a stored value.
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(Self::Accepted),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for consent in [Consent::Accepted, Consent::Declined] {
            assert_eq!(Consent::from_str(consent.as_str()), Some(consent));
        }
    }

    #[test]
    fn test_unknown_value_is_none() {
        assert_eq!(Consent::from_str("maybe"), None);
        assert_eq!(Consent::from_str(""), None);
    }
}

//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a VariantId where an ItemKey is expected. Both are
//! server-assigned opaque strings read off the DOM, never synthesized
//! client-side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A server-assigned opaque identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// The key identifying one cart line; surfaced as `data-cart-item-key` on the
// row and `data-item-key` on its quantity input and stepper buttons.
define_id!(ItemKey);

// The purchasable SKU variant; surfaced as `data-variant-id` on add triggers.
define_id!(VariantId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let key = ItemKey::new("abc123");
        assert_eq!(key.as_str(), "abc123");
    }

    #[test]
    fn test_id_from_string() {
        let id: VariantId = "42".into();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_id_display() {
        let key = ItemKey::new("abc123");
        assert_eq!(format!("{}", key), "abc123");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ItemKey::new("same"), ItemKey::new("same"));
        assert_ne!(ItemKey::new("same"), ItemKey::new("different"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemKey::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}

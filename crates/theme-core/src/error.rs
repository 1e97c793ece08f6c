//! Theme error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Add trigger without a variant id.
    #[error("Add trigger is missing data-variant-id")]
    MissingVariantId,

    /// A required DOM anchor is absent. Mutations abort silently on this.
    #[error("Missing DOM anchor: {0}")]
    MissingAnchor(&'static str),

    /// Transport-level failure (fetch rejected, connection dropped).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Response body did not parse.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A DOM operation failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        ThemeError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ThemeError::MissingAnchor(".ios-cart-form").to_string(),
            "Missing DOM anchor: .ios-cart-form"
        );
        assert_eq!(ThemeError::Status(422).to_string(), "Unexpected status: 422");
    }
}

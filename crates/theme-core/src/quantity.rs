//! Cart line quantities.
//!
//! Quantities are non-negative by construction; zero is the sentinel for
//! "remove this line". Values are always parsed fresh from the DOM input of
//! record, so the parse rules here define the whole boundary behavior:
//! anything that is not a non-negative integer parses as zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative line quantity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The remove sentinel.
    pub const ZERO: Quantity = Quantity(0);

    /// Create a quantity from a raw count.
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    /// Parse a raw input value.
    ///
    /// Empty strings, non-numeric text, and negative numbers all parse as
    /// zero, which routes the action to a remove.
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().parse::<u32>().unwrap_or(0))
    }

    /// The underlying count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// One more, saturating. Stock limits are the server's problem.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer, clamped at zero.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Zero means the line should be removed.
    pub fn is_removal(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Quantity {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(Quantity::parse("3"), Quantity::new(3));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(Quantity::parse(" 7 "), Quantity::new(7));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(Quantity::parse(""), Quantity::ZERO);
    }

    #[test]
    fn test_parse_non_numeric_is_zero() {
        assert_eq!(Quantity::parse("abc"), Quantity::ZERO);
    }

    #[test]
    fn test_parse_negative_is_zero() {
        assert_eq!(Quantity::parse("-2"), Quantity::ZERO);
    }

    #[test]
    fn test_increment() {
        assert_eq!(Quantity::new(2).increment(), Quantity::new(3));
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        assert_eq!(Quantity::new(1).decrement(), Quantity::ZERO);
        assert_eq!(Quantity::ZERO.decrement(), Quantity::ZERO);
    }

    #[test]
    fn test_zero_is_removal() {
        assert!(Quantity::ZERO.is_removal());
        assert!(!Quantity::new(1).is_removal());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&Quantity::new(5)).unwrap(), "5");
    }
}

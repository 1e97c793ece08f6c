//! Cart endpoint routes.
//!
//! All three are same-origin JSON endpoints; credentials follow the browser
//! default (same-origin cookies).

/// `GET` — current cart snapshot.
pub const SNAPSHOT: &str = "/cart.js";

/// `POST` — add lines to the cart.
pub const ADD: &str = "/cart/add.js";

/// `POST` — set absolute quantities for every line.
pub const UPDATE: &str = "/cart/update.js";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        assert_eq!(SNAPSHOT, "/cart.js");
        assert_eq!(ADD, "/cart/add.js");
        assert_eq!(UPDATE, "/cart/update.js");
    }
}

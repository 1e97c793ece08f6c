//! Toast kinds and the canonical user-facing strings.
//!
//! The toast itself is a DOM singleton owned by `theme-cart`; this module
//! pins down the class names and message wording so they stay consistent
//! between the controller and its tests.

/// Visual styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Modifier class appended to the base notification class.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "ios-cart-notification-success",
            Self::Error => "ios-cart-notification-error",
        }
    }
}

/// Fallback product title when the add trigger carries none.
pub const DEFAULT_PRODUCT_TITLE: &str = "Product";

/// Toast for a missing `data-variant-id` on an add trigger.
pub const MISSING_VARIANT: &str = "Error: Product variant not found";

/// Toast for a failed add request.
pub const ADD_FAILED: &str = "Failed to add product to cart. Please try again.";

/// Blocking alert for a failed quantity update.
pub const UPDATE_FAILED: &str = "Failed to update cart. Please try again.";

/// Blocking alert for a failed remove.
pub const REMOVE_FAILED: &str = "Failed to remove item. Please try again.";

/// Confirmation prompt before an explicit remove.
pub const CONFIRM_REMOVE: &str = "Remove this item from cart?";

/// Success toast after an add.
pub fn added_message(title: &str) -> String {
    format!("{title} added to cart!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_message() {
        assert_eq!(added_message("Socks"), "Socks added to cart!");
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(ToastKind::Success.css_class(), "ios-cart-notification-success");
        assert_eq!(ToastKind::Error.css_class(), "ios-cart-notification-error");
    }
}

//! Selector constants for the theme's DOM contract.
//!
//! The host page is server-rendered; these are the anchors the behavior layer
//! decorates. Keep every class name and data attribute here so the widgets
//! and their tests agree on the contract.

/// Add-to-cart trigger.
pub const ADD_TO_CART_BTN: &str = ".ios-add-to-cart-btn";
/// Container for cart-page mutations.
pub const CART_FORM: &str = ".ios-cart-form";
/// One line item row.
pub const CART_ITEM: &str = ".ios-cart-item";
/// Quantity field of record.
pub const QUANTITY_INPUT: &str = ".ios-quantity-input";
/// Header cart icon.
pub const CART_ICON: &str = ".ios-cart-icon";
/// Count badge inside the header cart icon.
pub const CART_BADGE: &str = ".ios-cart-badge";
/// Mobile cart link count label.
pub const MOBILE_CART_COUNT: &str = ".ios-mobile-cart-link .ios-cart-count";

/// Visible label inside an add trigger.
pub const BTN_TEXT: &str = ".btn-text";
/// Loading sibling swapped in during an add request.
pub const BTN_LOADING: &str = ".btn-loading";

/// Class marking a row with an in-flight mutation.
pub const LOADING_CLASS: &str = "ios-loading";
/// Base class of the toast element.
pub const NOTIFICATION_CLASS: &str = "ios-cart-notification";
/// Id of the one-time injected toast stylesheet.
pub const NOTIFICATION_STYLE_ID: &str = "ios-cart-notification-styles";

/// Item key on quantity inputs and mutation triggers.
pub const ATTR_ITEM_KEY: &str = "data-item-key";
/// Item key on the row itself.
pub const ATTR_CART_ITEM_KEY: &str = "data-cart-item-key";
/// Variant id on add triggers.
pub const ATTR_VARIANT_ID: &str = "data-variant-id";
/// Optional product title on add triggers.
pub const ATTR_PRODUCT_TITLE: &str = "data-product-title";

/// Document event emitted after every completed badge refresh.
pub const CART_UPDATED_EVENT: &str = "cart:updated";
/// Document event emitted when a country is picked.
pub const COUNTRY_SELECTED_EVENT: &str = "countrySelected";

/// Quantity input for one row.
pub fn quantity_input_for(key: &str) -> String {
    format!("{QUANTITY_INPUT}[{ATTR_ITEM_KEY}=\"{key}\"]")
}

/// Row element for one item key.
pub fn cart_item_for(key: &str) -> String {
    format!("{CART_ITEM}[{ATTR_CART_ITEM_KEY}=\"{key}\"]")
}

/// Country option for a stored country code.
pub fn country_option_for(code: &str) -> String {
    format!("[data-country=\"{code}\"]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_input_selector() {
        assert_eq!(
            quantity_input_for("abc"),
            ".ios-quantity-input[data-item-key=\"abc\"]"
        );
    }

    #[test]
    fn test_cart_item_selector() {
        assert_eq!(
            cart_item_for("abc"),
            ".ios-cart-item[data-cart-item-key=\"abc\"]"
        );
    }

    #[test]
    fn test_country_option_selector() {
        assert_eq!(country_option_for("DE"), "[data-country=\"DE\"]");
    }
}

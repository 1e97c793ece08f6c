//! Stateless companion widgets for the ios-theme.
//!
//! Each widget is an independent initializer over server-rendered anchors:
//! cookie consent banner, mobile navigation drawer, single-open accordion,
//! smooth anchor scrolling, country and language pickers, and the media
//! helpers (lazy images, broken-image hiding, CTA loading state). None of
//! them share state with the cart; they only consume the common init
//! contract and, where relevant, the `cart:updated` bus event.

pub mod consent;
pub mod locale;

#[cfg(target_arch = "wasm32")]
pub mod accordion;
#[cfg(target_arch = "wasm32")]
pub mod cookie_banner;
#[cfg(target_arch = "wasm32")]
pub mod country_selector;
#[cfg(target_arch = "wasm32")]
pub mod focus;
#[cfg(target_arch = "wasm32")]
pub mod language_selector;
#[cfg(target_arch = "wasm32")]
pub mod media;
#[cfg(target_arch = "wasm32")]
pub mod mobile_menu;
#[cfg(target_arch = "wasm32")]
pub mod smooth_scroll;

//! Thin web-sys helper layer for the ios-theme widgets.
//!
//! Small, ergonomic wrappers for the show / hide / query / class patterns the
//! widgets repeat, plus a guarded `localStorage` wrapper and custom-event
//! dispatch. Selector strings for the whole DOM contract live in
//! [`selectors`] so class names and data attributes have one source of truth.

pub mod selectors;

#[cfg(target_arch = "wasm32")]
pub mod element;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use element::{
    add_class, closest, document, has_class, hide, query, query_all, remove_class, show, window,
};
#[cfg(target_arch = "wasm32")]
pub use events::{dispatch_custom_event, on_document, on_target, target_element};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;

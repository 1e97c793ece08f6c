//! Cart synchronization controller.
//!
//! Reads quantities from the DOM inputs of record, issues mutations to the
//! remote cart endpoints, and reconciles the header badge with server truth.
//! The server is always the source of truth: every successful update or
//! remove ends in a full page reload, and the badge is only ever written from
//! a fresh `/cart.js` snapshot.
//!
//! Concurrency model: single-threaded browser event loop, no cancellation,
//! no timeouts, no retry. Every mutation submits the complete
//! absolute-quantity map of all visible rows, so concurrent edits to
//! different rows cannot clobber one another through stale deltas.

pub mod endpoints;

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod notification;
#[cfg(target_arch = "wasm32")]
pub mod wiring;

#[cfg(target_arch = "wasm32")]
pub use controller::CartController;
#[cfg(target_arch = "wasm32")]
pub use wiring::init;

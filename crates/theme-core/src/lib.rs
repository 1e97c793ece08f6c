//! Domain types and logic for the ios-theme cart core.
//!
//! Everything in this crate is plain Rust with no DOM or network access, so
//! the cart protocol can be exercised on any target:
//!
//! - **Ids**: typed item keys and variant identifiers
//! - **Quantity**: non-negative quantities with the zero-means-remove sentinel
//! - **Payloads**: the `/cart/add.js` and `/cart/update.js` wire bodies and
//!   the `/cart.js` snapshot
//! - **Mutation routing**: stepper clicks and input edits resolved into
//!   update-or-remove decisions
//! - **Badge model**: header badge / mobile label rendering from a count
//! - **Dispatch**: the declarative table behind the delegated listeners
//! - **Registry**: per-widget init outcomes for the orchestrator

pub mod badge;
pub mod dispatch;
pub mod error;
pub mod ids;
pub mod mutation;
pub mod notify;
pub mod payload;
pub mod quantity;
pub mod registry;

pub use badge::BadgeRender;
pub use dispatch::{CartHandler, Dispatcher, EventKind, Matcher, TargetFacts};
pub use error::ThemeError;
pub use ids::{ItemKey, VariantId};
pub use mutation::{CartMutation, StepDirection};
pub use payload::{AddPayload, CartSnapshot, UpdatePayload};
pub use quantity::Quantity;
pub use registry::{InitOutcome, WidgetRegistry};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::badge::BadgeRender;
    pub use crate::dispatch::{CartHandler, Dispatcher, EventKind, Matcher, TargetFacts};
    pub use crate::error::ThemeError;
    pub use crate::ids::{ItemKey, VariantId};
    pub use crate::mutation::{CartMutation, StepDirection};
    pub use crate::payload::{AddPayload, CartSnapshot, UpdatePayload};
    pub use crate::quantity::Quantity;
    pub use crate::registry::{InitOutcome, WidgetRegistry};
}

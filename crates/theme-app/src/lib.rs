//! WASM entry point and init orchestrator.
//!
//! Runs every widget initializer exactly once after the document is parsed,
//! records each outcome in the widget registry, and logs the summary in
//! debug mode (`?debug=1`). Initializers whose anchors are missing report
//! `Skipped` and do nothing; an initializer that errors is logged and
//! treated as skipped, never fatal to the others.

pub mod debug;

#[cfg(target_arch = "wasm32")]
mod orchestrator;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point, invoked by the wasm-bindgen loader once the module is
/// instantiated (the script is loaded deferred, so the DOM is parsed).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let debug = orchestrator::debug_enabled();
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);

    orchestrator::init_theme(debug);
}

//! Widget initialization order and outcome recording.

use theme_core::{InitOutcome, WidgetRegistry};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// How long the cookie banner init is deferred; it must not compete with
/// first paint or the cart's initial badge sync.
const COOKIE_BANNER_DELAY_MS: u32 = 1_000;

pub fn debug_enabled() -> bool {
    theme_dom::window()
        .and_then(|w| w.location().search().ok())
        .map(|s| crate::debug::debug_flag(&s))
        .unwrap_or(false)
}

/// Run every initializer once and record the outcomes.
pub fn init_theme(debug: bool) {
    let Some(doc) = theme_dom::document() else {
        return;
    };

    honor_reduced_motion(&doc);

    let mut registry = WidgetRegistry::new();

    record_count(
        &mut registry,
        "smooth-scroll",
        theme_widgets::smooth_scroll::init(&doc),
    );
    record(
        &mut registry,
        "mobile-menu",
        theme_widgets::mobile_menu::init(&doc),
    );
    record_count(
        &mut registry,
        "faq-accordion",
        theme_widgets::accordion::init(&doc),
    );
    record(
        &mut registry,
        "country-selector",
        theme_widgets::country_selector::init(&doc),
    );
    record(
        &mut registry,
        "language-selector",
        theme_widgets::language_selector::init(&doc),
    );
    record_count(&mut registry, "media", theme_widgets::media::init(&doc));
    record(&mut registry, "cart", theme_cart::init(&doc));

    // Deferred: consent UI is the least urgent thing on the page.
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(COOKIE_BANNER_DELAY_MS).await;
        if let Some(doc) = theme_dom::document() {
            match theme_widgets::cookie_banner::init(&doc) {
                Ok(outcome) => log::debug!("cookie-banner: {outcome}"),
                Err(e) => log::error!("cookie-banner init failed: {e:?}"),
            }
        }
    });

    if debug {
        log::debug!("ios-theme debug mode");
        for line in registry.summary() {
            log::debug!("  {line}");
        }
        log::debug!("reduced motion: {}", prefers_reduced_motion());
    }
}

fn record(registry: &mut WidgetRegistry, name: &'static str, result: Result<InitOutcome, JsValue>) {
    match result {
        Ok(outcome) => registry.record(name, outcome),
        Err(e) => {
            log::error!("{name} init failed: {e:?}");
            registry.record(name, InitOutcome::Skipped);
        }
    }
}

fn record_count(registry: &mut WidgetRegistry, name: &'static str, result: Result<usize, JsValue>) {
    match result {
        Ok(count) => registry.record_count(name, count),
        Err(e) => {
            log::error!("{name} init failed: {e:?}");
            registry.record(name, InitOutcome::Skipped);
        }
    }
}

fn prefers_reduced_motion() -> bool {
    theme_dom::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Users who ask for reduced motion get instant scrolling everywhere.
fn honor_reduced_motion(doc: &Document) {
    if !prefers_reduced_motion() {
        return;
    }
    if let Some(root) = doc
        .document_element()
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = root.style().set_property("scroll-behavior", "auto");
    }
}

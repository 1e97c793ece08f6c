//! Element lookup and mutation helpers.
//!
//! Selector syntax errors cannot happen at runtime (all selectors are
//! compile-time constants), so query failures collapse to `None` and class
//! list results are discarded the way the surrounding widgets want them.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// The global window, when running in a browser context.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The current document.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First match for a selector, or `None`.
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// All matches for a selector.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = doc.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Closest ancestor (or self) matching a selector.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Reveal an element by clearing its inline display.
pub fn show(el: &HtmlElement) {
    let _ = el.style().remove_property("display");
}

/// Hide an element with inline `display: none`.
pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

pub fn add_class(el: &Element, name: &str) {
    let _ = el.class_list().add_1(name);
}

pub fn remove_class(el: &Element, name: &str) {
    let _ = el.class_list().remove_1(name);
}

pub fn has_class(el: &Element, name: &str) -> bool {
    el.class_list().contains(name)
}

/// Cast to `HtmlElement` for style and focus access.
pub fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

/// Cast to `HtmlInputElement` for value access.
pub fn as_input(el: &Element) -> Option<&HtmlInputElement> {
    el.dyn_ref::<HtmlInputElement>()
}

/// Focusable elements inside a container, in document order.
/// Used by the focus traps in the mobile menu and cookie banner.
pub fn focusables(container: &Element) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = container.query_selector_all("a, button, [tabindex]:not([tabindex=\"-1\"])") {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

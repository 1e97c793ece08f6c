//! Smooth in-page anchor scrolling.
//!
//! Anchor clicks scroll smoothly to their target, close the mobile drawer if
//! it is open, and hand focus to the target via a temporary `tabindex="-1"`
//! that is cleared a second later.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const NAV_ID: &str = "iosMobileNav";
const BURGER_ID: &str = "iosBurger";
const FOCUS_RESET_MS: u32 = 1_000;

/// Wire every in-page anchor link. Returns how many were found.
pub fn init(doc: &Document) -> Result<usize, JsValue> {
    let links = theme_dom::query_all(doc, ANCHOR_SELECTOR);
    let count = links.len();

    for link in links {
        let link_ref = link.clone();
        theme_dom::on_target(&link, "click", move |event: Event| {
            on_anchor_click(&link_ref, &event);
        })?;
    }

    Ok(count)
}

fn on_anchor_click(link: &Element, event: &Event) {
    let Some(doc) = theme_dom::document() else {
        return;
    };
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    if href == "#" {
        return;
    }
    let Some(target) = theme_dom::query(&doc, &href) else {
        return;
    };

    event.prevent_default();
    scroll_to(&target);
    close_mobile_menu(&doc);
    focus_target(target);
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn close_mobile_menu(doc: &Document) {
    let Some(nav) = doc.get_element_by_id(NAV_ID) else {
        return;
    };
    if !theme_dom::has_class(&nav, "open") {
        return;
    }
    theme_dom::remove_class(&nav, "open");
    if let Some(burger) = doc.get_element_by_id(BURGER_ID) {
        let _ = burger.set_attribute("aria-expanded", "false");
        if let Some(label) = burger.get_attribute("data-menu-open") {
            let _ = burger.set_attribute("aria-label", &label);
        }
    }
}

/// Focus handoff: the scroll target is made focusable just long enough to
/// receive focus.
fn focus_target(target: Element) {
    let _ = target.set_attribute("tabindex", "-1");
    if let Some(html) = target.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(FOCUS_RESET_MS).await;
        let _ = target.remove_attribute("tabindex");
    });
}

//! Single-open FAQ accordion over native `<details>` elements.
//!
//! Opening one item closes every other. Summaries get `role="button"` and a
//! maintained `aria-expanded`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlDetailsElement};

const DETAILS_SELECTOR: &str = "details.ios-details";

/// Wire every accordion item. Returns how many were found.
pub fn init(doc: &Document) -> Result<usize, JsValue> {
    let all: Vec<HtmlDetailsElement> = theme_dom::query_all(doc, DETAILS_SELECTOR)
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlDetailsElement>().ok())
        .collect();

    for details in &all {
        sync_summary(details);

        let details_ref = details.clone();
        let siblings = all.clone();
        theme_dom::on_target(details, "toggle", move |_event: Event| {
            sync_summary(&details_ref);
            if !details_ref.open() {
                return;
            }
            for other in &siblings {
                if !other.is_same_node(Some(details_ref.as_ref())) && other.open() {
                    other.set_open(false);
                    sync_summary(other);
                }
            }
        })?;
    }

    Ok(all.len())
}

fn sync_summary(details: &HtmlDetailsElement) {
    if let Some(summary) = details.query_selector("summary").ok().flatten() {
        let _ = summary.set_attribute("role", "button");
        let _ = summary.set_attribute(
            "aria-expanded",
            if details.open() { "true" } else { "false" },
        );
    }
}

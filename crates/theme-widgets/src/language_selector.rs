//! Language picker listbox.
//!
//! Picking a language navigates to the locale-prefixed version of the
//! current page: the option's own link wins when present, otherwise the path
//! is rewritten from the option's `data-locale` (see [`crate::locale`]).

use theme_core::InitOutcome;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::locale::locale_path;

const SELECTOR_ROOT: &str = ".ios-language-selector";
const TRIGGER_ID: &str = "iosLanguageTrigger";
const LIST_ID: &str = "iosLanguageList";
const FLAG_ID: &str = "iosLanguageFlag";
const CODE_ID: &str = "iosLanguageCode";
const OPTION_SELECTOR: &str = "li[role=\"option\"]";

pub fn init(doc: &Document) -> Result<InitOutcome, JsValue> {
    let (Some(root), Some(trigger), Some(list), Some(_flag), Some(_code)) = (
        theme_dom::query(doc, SELECTOR_ROOT),
        doc.get_element_by_id(TRIGGER_ID),
        doc.get_element_by_id(LIST_ID),
        doc.get_element_by_id(FLAG_ID),
        doc.get_element_by_id(CODE_ID),
    ) else {
        return Ok(InitOutcome::Skipped);
    };

    {
        let root = root.clone();
        let list = list.clone();
        theme_dom::on_target(&trigger, "click", move |event: Event| {
            event.stop_propagation();
            if is_open(&root) {
                close(&root, &list);
            } else {
                open(&root, &list);
                if let Some(first) = list.query_selector(OPTION_SELECTOR).ok().flatten() {
                    focus(&first);
                }
            }
        })?;
    }

    for option in options(&list) {
        let option_ref = option.clone();
        theme_dom::on_target(&option, "click", move |_event: Event| {
            navigate(&option_ref);
        })?;

        let root = root.clone();
        let list = list.clone();
        let trigger = trigger.clone();
        let option_ref = option.clone();
        theme_dom::on_target(&option, "keydown", move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            match key_event.key().as_str() {
                "Enter" | " " => {
                    event.prevent_default();
                    navigate(&option_ref);
                }
                "Escape" => {
                    close(&root, &list);
                    focus(&trigger);
                }
                "ArrowDown" => {
                    event.prevent_default();
                    if let Some(next) = option_ref.next_element_sibling() {
                        focus(&next);
                    }
                }
                "ArrowUp" => {
                    event.prevent_default();
                    match option_ref.previous_element_sibling() {
                        Some(prev) => focus(&prev),
                        None => focus(&trigger),
                    }
                }
                _ => {}
            }
        })?;
    }

    {
        let root = root.clone();
        let list = list.clone();
        theme_dom::on_document(doc, "click", move |event: Event| {
            let inside = theme_dom::target_element(&event)
                .is_some_and(|t| root.contains(Some(t.as_ref())));
            if !inside {
                close(&root, &list);
            }
        })?;
    }

    {
        let root = root.clone();
        let list = list.clone();
        let trigger = trigger.clone();
        theme_dom::on_document(doc, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape");
            if is_escape && is_open(&root) {
                close(&root, &list);
                focus(&trigger);
            }
        })?;
    }

    Ok(InitOutcome::Ready)
}

/// Navigate to the option's locale. The option's own link wins; otherwise
/// rewrite the current path under the option's `data-locale`.
fn navigate(option: &Element) {
    let Some(window) = theme_dom::window() else {
        return;
    };
    let location = window.location();

    if let Some(href) = option
        .query_selector("a")
        .ok()
        .flatten()
        .and_then(|link| link.get_attribute("href"))
    {
        if !href.is_empty() {
            let _ = location.set_href(&href);
            return;
        }
    }

    let Some(locale) = option.get_attribute("data-locale") else {
        return;
    };
    let current = location.pathname().unwrap_or_default();
    let _ = location.set_href(&locale_path(&current, &locale));
}

fn options(list: &Element) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(found) = list.query_selector_all(OPTION_SELECTOR) {
        for i in 0..found.length() {
            if let Some(el) = found.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

fn is_open(root: &Element) -> bool {
    root.get_attribute("aria-expanded").as_deref() == Some("true")
}

fn open(root: &Element, list: &Element) {
    let _ = root.set_attribute("aria-expanded", "true");
    let _ = list.remove_attribute("hidden");
}

fn close(root: &Element, list: &Element) {
    let _ = root.set_attribute("aria-expanded", "false");
    let _ = list.set_attribute("hidden", "true");
}

fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

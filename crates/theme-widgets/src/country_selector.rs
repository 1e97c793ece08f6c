//! Country picker listbox.
//!
//! Selection updates the flag and name display, persists the country code
//! locally, and announces the pick with a `countrySelected` document event.
//! Keyboard protocol per option: Enter / Space select, arrows move, Escape
//! closes back to the trigger.

use theme_core::InitOutcome;
use theme_dom::{selectors, LocalStore};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::locale::COUNTRY_STORAGE_KEY;

const SELECTOR_ROOT: &str = ".ios-country-selector";
const TRIGGER_ID: &str = "iosCountryTrigger";
const LIST_ID: &str = "iosCountryList";
const FLAG_ID: &str = "iosCountryFlag";
const NAME_ID: &str = "iosCountryName";
const OPTION_SELECTOR: &str = "li[role=\"option\"]";

pub fn init(doc: &Document) -> Result<InitOutcome, JsValue> {
    let (Some(root), Some(trigger), Some(list), Some(flag), Some(name)) = (
        theme_dom::query(doc, SELECTOR_ROOT),
        doc.get_element_by_id(TRIGGER_ID),
        doc.get_element_by_id(LIST_ID),
        doc.get_element_by_id(FLAG_ID),
        doc.get_element_by_id(NAME_ID),
    ) else {
        return Ok(InitOutcome::Skipped);
    };

    let options = option_elements(&list);

    // Restore the persisted pick.
    if let Some(saved) = LocalStore::open().and_then(|s| s.get(COUNTRY_STORAGE_KEY)) {
        if let Some(saved_option) = list
            .query_selector(&selectors::country_option_for(&saved))
            .ok()
            .flatten()
        {
            update_display(&flag, &name, &options, &saved_option);
        }
    }

    {
        let root = root.clone();
        let list = list.clone();
        theme_dom::on_target(&trigger, "click", move |event: Event| {
            event.stop_propagation();
            let was_open = is_open(&root);
            set_open(&root, !was_open);
            if !was_open {
                focus_first_option(&list);
            }
        })?;
    }

    for option in &options {
        let ctx = SelectionContext {
            root: root.clone(),
            trigger: trigger.clone(),
            flag: flag.clone(),
            name: name.clone(),
            options: options.clone(),
        };
        let option_ref = option.clone();
        theme_dom::on_target(option, "click", move |_event: Event| {
            ctx.select(&option_ref);
        })?;

        let ctx = SelectionContext {
            root: root.clone(),
            trigger: trigger.clone(),
            flag: flag.clone(),
            name: name.clone(),
            options: options.clone(),
        };
        let option_ref = option.clone();
        theme_dom::on_target(option, "keydown", move |event: Event| {
            ctx.on_option_key(&option_ref, &event);
        })?;
    }

    // Outside clicks close the dropdown.
    {
        let root = root.clone();
        theme_dom::on_document(doc, "click", move |event: Event| {
            let inside = theme_dom::target_element(&event)
                .is_some_and(|t| root.contains(Some(t.as_ref())));
            if !inside {
                set_open(&root, false);
            }
        })?;
    }

    // Escape closes and returns focus to the trigger.
    {
        let root = root.clone();
        let trigger = trigger.clone();
        theme_dom::on_document(doc, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape");
            if is_escape && is_open(&root) {
                set_open(&root, false);
                focus(&trigger);
            }
        })?;
    }

    Ok(InitOutcome::Ready)
}

struct SelectionContext {
    root: Element,
    trigger: Element,
    flag: Element,
    name: Element,
    options: Vec<Element>,
}

impl SelectionContext {
    fn select(&self, option: &Element) {
        update_display(&self.flag, &self.name, &self.options, option);
        set_open(&self.root, false);
        focus(&self.trigger);

        if let Some(country) = option.get_attribute("data-country") {
            if let Some(store) = LocalStore::open() {
                store.set(COUNTRY_STORAGE_KEY, &country);
            }
            announce(option, &country);
        }
    }

    fn on_option_key(&self, option: &Element, event: &Event) {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match key_event.key().as_str() {
            "Enter" | " " => {
                event.prevent_default();
                self.select(option);
            }
            "Escape" => {
                set_open(&self.root, false);
                focus(&self.trigger);
            }
            "ArrowDown" => {
                event.prevent_default();
                if let Some(next) = option.next_element_sibling() {
                    focus(&next);
                }
            }
            "ArrowUp" => {
                event.prevent_default();
                match option.previous_element_sibling() {
                    Some(prev) => focus(&prev),
                    None => focus(&self.trigger),
                }
            }
            _ => {}
        }
    }
}

/// Emit `countrySelected` with `{country, flag, name}` in its detail.
fn announce(option: &Element, country: &str) {
    let Some(doc) = theme_dom::document() else {
        return;
    };
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &"country".into(), &country.into());
    if let Some(flag) = option.get_attribute("data-flag") {
        let _ = js_sys::Reflect::set(&detail, &"flag".into(), &flag.as_str().into());
    }
    if let Some(name) = option.get_attribute("data-name") {
        let _ = js_sys::Reflect::set(&detail, &"name".into(), &name.as_str().into());
    }
    if let Err(e) =
        theme_dom::dispatch_custom_event(&doc, selectors::COUNTRY_SELECTED_EVENT, &detail.into())
    {
        log::warn!("countrySelected dispatch failed: {e:?}");
    }
}

fn update_display(flag: &Element, name: &Element, options: &[Element], picked: &Element) {
    if let Some(value) = picked.get_attribute("data-flag") {
        flag.set_text_content(Some(&value));
    }
    if let Some(value) = picked.get_attribute("data-name") {
        name.set_text_content(Some(&value));
    }
    for option in options {
        let selected = option.is_same_node(Some(picked.as_ref()));
        let _ = option.set_attribute("aria-selected", if selected { "true" } else { "false" });
    }
}

fn option_elements(list: &Element) -> Vec<Element> {
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

fn set_open(root: &Element, open: bool) {
    let _ = root.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

fn focus_first_option(list: &Element) {
    if let Some(first) = list.query_selector(OPTION_SELECTOR).ok().flatten() {
        focus(&first);
    }
}

fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

//! Mobile navigation drawer.
//!
//! Burger toggles the drawer; while open, focus moves to the first link and
//! Tab is trapped inside. Outside clicks and Escape close the drawer and
//! hand focus back to the burger. The ARIA label swaps between the
//! `data-menu-open` / `data-menu-close` texts on the burger.

use std::cell::RefCell;
use std::rc::Rc;

use theme_core::InitOutcome;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::focus::FocusTrap;

const BURGER_ID: &str = "iosBurger";
const NAV_ID: &str = "iosMobileNav";
const OPEN_CLASS: &str = "open";
const DEFAULT_OPEN_LABEL: &str = "Open menu";
const DEFAULT_CLOSE_LABEL: &str = "Close menu";

pub fn init(doc: &Document) -> Result<InitOutcome, JsValue> {
    let (Some(burger), Some(nav)) = (
        doc.get_element_by_id(BURGER_ID),
        doc.get_element_by_id(NAV_ID),
    ) else {
        return Ok(InitOutcome::Skipped);
    };

    let trap: Rc<RefCell<Option<FocusTrap>>> = Rc::new(RefCell::new(None));

    {
        let burger = burger.clone();
        let nav = nav.clone();
        let trap = trap.clone();
        theme_dom::on_target(&burger, "click", move |event: Event| {
            event.stop_propagation();
            let is_open = nav.class_list().toggle(OPEN_CLASS).unwrap_or(false);
            let _ = burger.set_attribute("aria-expanded", if is_open { "true" } else { "false" });
            let _ = burger.set_attribute("aria-label", &label_for(&burger, is_open));

            if is_open {
                if let Some(first_link) = first_link(&nav) {
                    let _ = first_link.focus();
                    match FocusTrap::install(&nav) {
                        Ok(installed) => *trap.borrow_mut() = Some(installed),
                        Err(e) => log::warn!("Mobile menu focus trap failed: {e:?}"),
                    }
                }
            } else {
                release(&burger, &trap);
            }
        })?;
    }

    // Close when clicking outside the drawer.
    {
        let burger = burger.clone();
        let nav = nav.clone();
        let trap = trap.clone();
        theme_dom::on_document(doc, "click", move |event: Event| {
            if !theme_dom::has_class(&nav, OPEN_CLASS) {
                return;
            }
            let target = theme_dom::target_element(&event);
            let inside = target.is_some_and(|t| {
                nav.contains(Some(t.as_ref())) || burger.contains(Some(t.as_ref()))
            });
            if !inside {
                close(&burger, &nav, &trap);
            }
        })?;
    }

    // Close on Escape.
    {
        let burger = burger.clone();
        let nav = nav.clone();
        let trap = trap.clone();
        theme_dom::on_document(doc, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape");
            if is_escape && theme_dom::has_class(&nav, OPEN_CLASS) {
                close(&burger, &nav, &trap);
            }
        })?;
    }

    Ok(InitOutcome::Ready)
}

fn label_for(burger: &Element, open: bool) -> String {
    if open {
        burger
            .get_attribute("data-menu-close")
            .unwrap_or_else(|| DEFAULT_CLOSE_LABEL.to_string())
    } else {
        burger
            .get_attribute("data-menu-open")
            .unwrap_or_else(|| DEFAULT_OPEN_LABEL.to_string())
    }
}

fn first_link(nav: &Element) -> Option<HtmlElement> {
    nav.query_selector("a")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn close(burger: &Element, nav: &Element, trap: &Rc<RefCell<Option<FocusTrap>>>) {
    theme_dom::remove_class(nav, OPEN_CLASS);
    let _ = burger.set_attribute("aria-expanded", "false");
    let _ = burger.set_attribute("aria-label", &label_for(burger, false));
    release(burger, trap);
}

/// Drop the trap and hand focus back to the burger.
fn release(burger: &Element, trap: &Rc<RefCell<Option<FocusTrap>>>) {
    if let Some(installed) = trap.borrow_mut().take() {
        installed.remove();
    }
    if let Some(burger) = burger.dyn_ref::<HtmlElement>() {
        let _ = burger.focus();
    }
}

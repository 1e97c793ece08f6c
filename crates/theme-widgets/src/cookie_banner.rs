//! GDPR cookie consent banner.
//!
//! Revealed once, a second after init, unless a consent decision is already
//! stored. While visible it behaves as a modal dialog: ARIA dialog
//! attributes, focus moved to the first button, and Tab trapped inside.
//! Escape counts as decline.

use std::cell::RefCell;
use std::rc::Rc;

use theme_core::InitOutcome;
use theme_dom::LocalStore;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::consent::{Consent, STORAGE_KEY};
use crate::focus::FocusTrap;

const BANNER_ID: &str = "iosCookieBanner";
const ACCEPT_ID: &str = "acceptCookies";
const DECLINE_ID: &str = "declineCookies";
const TITLE_ID: &str = "iosCookieBannerTitle";
const SHOW_CLASS: &str = "show";
const REVEAL_DELAY_MS: u32 = 1_000;

pub fn init(doc: &Document) -> Result<InitOutcome, JsValue> {
    let Some(banner) = doc.get_element_by_id(BANNER_ID) else {
        return Ok(InitOutcome::Skipped);
    };

    let trap: Rc<RefCell<Option<FocusTrap>>> = Rc::new(RefCell::new(None));

    let already_decided = LocalStore::open()
        .and_then(|store| store.get(STORAGE_KEY))
        .as_deref()
        .and_then(Consent::from_str)
        .is_some();

    if !already_decided {
        let banner = banner.clone();
        let trap = trap.clone();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REVEAL_DELAY_MS).await;
            reveal(&banner, &trap);
        });
    }

    if let Some(accept) = doc.get_element_by_id(ACCEPT_ID) {
        let banner = banner.clone();
        let trap = trap.clone();
        theme_dom::on_target(&accept, "click", move |_event: Event| {
            dismiss(&banner, Consent::Accepted, &trap);
        })?;
    }

    if let Some(decline) = doc.get_element_by_id(DECLINE_ID) {
        let banner = banner.clone();
        let trap = trap.clone();
        theme_dom::on_target(&decline, "click", move |_event: Event| {
            dismiss(&banner, Consent::Declined, &trap);
        })?;
    }

    // Escape while shown declines.
    {
        let banner = banner.clone();
        let trap = trap.clone();
        theme_dom::on_document(doc, "keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape");
            if is_escape && theme_dom::has_class(&banner, SHOW_CLASS) {
                dismiss(&banner, Consent::Declined, &trap);
            }
        })?;
    }

    Ok(InitOutcome::Ready)
}

fn reveal(banner: &Element, trap: &Rc<RefCell<Option<FocusTrap>>>) {
    theme_dom::add_class(banner, SHOW_CLASS);
    let _ = banner.set_attribute("role", "dialog");
    let _ = banner.set_attribute("aria-labelledby", TITLE_ID);
    let _ = banner.set_attribute("aria-modal", "true");

    match FocusTrap::install(banner) {
        Ok(installed) => *trap.borrow_mut() = Some(installed),
        Err(e) => log::warn!("Cookie banner focus trap failed: {e:?}"),
    }

    if let Some(button) = banner
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = button.focus();
    }
}

fn dismiss(banner: &Element, consent: Consent, trap: &Rc<RefCell<Option<FocusTrap>>>) {
    if let Some(store) = LocalStore::open() {
        store.set(STORAGE_KEY, consent.as_str());
    }
    theme_dom::remove_class(banner, SHOW_CLASS);
    let _ = banner.remove_attribute("role");
    let _ = banner.remove_attribute("aria-labelledby");
    let _ = banner.remove_attribute("aria-modal");
    if let Some(installed) = trap.borrow_mut().take() {
        installed.remove();
    }
}

//! The cart mutator.
//!
//! Four operations: add a variant, set a line's quantity, remove a line, and
//! refresh the badge from a snapshot. All in-flight UI state lives in the
//! DOM (loading classes, disabled triggers); the controller itself holds
//! nothing across events.

use theme_core::notify::{self, ToastKind};
use theme_core::prelude::*;
use theme_dom::{element, selectors};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::{api, notification};

/// Minimum time the add trigger stays in its loading state, so the user sees
/// it even on very fast networks.
const MIN_LOADING_MS: u32 = 1_000;

/// Handle on the cart mutator. Stateless by design: the DOM owns all
/// in-flight UI state, so the handle is free to copy into event closures.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartController;

impl CartController {
    pub fn new() -> Self {
        Self
    }

    /// Add quantity one of the trigger's variant, then refresh the badge.
    /// No page reload on this path.
    pub fn add(self, trigger: Element) {
        spawn_local(run_add(trigger));
    }

    /// Set a line to a positive quantity. Reloads the page on success.
    pub fn update_quantity(self, key: ItemKey, quantity: Quantity) {
        spawn_local(run_mutation(CartMutation::Update { key, quantity }));
    }

    /// Remove a line (quantity zero on the wire). Reloads the page on
    /// success, including into the empty-cart state.
    pub fn remove(self, key: ItemKey) {
        spawn_local(run_mutation(CartMutation::Remove { key }));
    }

    /// Fetch the snapshot and reconcile both count surfaces with it.
    /// Passive: failures are logged and the UI stays untouched.
    pub fn refresh_badge(self) {
        spawn_local(run_refresh());
    }
}

/// Collect every visible row into the absolute-quantity payload: one entry
/// per row, keyed by the row's `data-cart-item-key`, valued by the integer
/// parsed from the row's quantity input.
pub fn encode_updates(doc: &Document) -> UpdatePayload {
    let mut rows = Vec::new();
    for input in theme_dom::query_all(doc, selectors::QUANTITY_INPUT) {
        let Some(row) = theme_dom::closest(&input, selectors::CART_ITEM) else {
            continue;
        };
        let Some(key) = row.get_attribute(selectors::ATTR_CART_ITEM_KEY) else {
            continue;
        };
        let quantity = element::as_input(&input)
            .map(|i| Quantity::parse(&i.value()))
            .unwrap_or(Quantity::ZERO);
        rows.push((ItemKey::new(key), quantity));
    }
    UpdatePayload::from_rows(rows)
}

/// Write a badge render into the header badge and mobile link.
pub fn apply_badge(doc: &Document, render: &BadgeRender) {
    if let Some(badge) = theme_dom::query(doc, selectors::CART_ICON)
        .and_then(|icon| icon.query_selector(selectors::CART_BADGE).ok().flatten())
    {
        apply_surface(&badge, render.badge_text.as_deref());
    }
    if let Some(label) = theme_dom::query(doc, selectors::MOBILE_CART_COUNT) {
        apply_surface(&label, render.mobile_text.as_deref());
    }
}

fn apply_surface(el: &Element, text: Option<&str>) {
    let Some(html) = element::as_html(el) else {
        return;
    };
    match text {
        Some(text) => {
            el.set_text_content(Some(text));
            theme_dom::show(html);
        }
        None => theme_dom::hide(html),
    }
}

/// Emit `cart:updated` on the document with `{count}` in its detail.
pub fn emit_cart_updated(doc: &Document, count: u32) {
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &detail,
        &JsValue::from_str("count"),
        &JsValue::from_f64(f64::from(count)),
    );
    if let Err(e) =
        theme_dom::dispatch_custom_event(doc, selectors::CART_UPDATED_EVENT, &detail.into())
    {
        log::warn!("cart:updated dispatch failed: {e:?}");
    }
}

async fn run_refresh() {
    let Some(doc) = theme_dom::document() else {
        return;
    };
    match api::fetch_snapshot().await {
        Ok(snapshot) => {
            apply_badge(&doc, &BadgeRender::from_count(snapshot.item_count));
            emit_cart_updated(&doc, snapshot.item_count);
        }
        Err(e) => {
            // Passive refresh: leave the UI as it was.
            log::warn!("Failed to update cart count: {e}");
        }
    }
}

async fn run_add(trigger: Element) {
    let Some(doc) = theme_dom::document() else {
        return;
    };

    let Some(variant) = trigger.get_attribute(selectors::ATTR_VARIANT_ID) else {
        notification::show(&doc, notify::MISSING_VARIANT, ToastKind::Error);
        return;
    };
    let title = trigger
        .get_attribute(selectors::ATTR_PRODUCT_TITLE)
        .unwrap_or_else(|| notify::DEFAULT_PRODUCT_TITLE.to_string());

    let loading = AddTriggerLoading::engage(&trigger);
    let payload = AddPayload::single(VariantId::new(variant));

    // The trigger stays in its loading state for at least MIN_LOADING_MS,
    // i.e. max(network, minimum), never less.
    let (result, ()) = futures::join!(
        api::post_add(&payload),
        gloo_timers::future::TimeoutFuture::new(MIN_LOADING_MS),
    );

    match result {
        Ok(()) => {
            notification::show(&doc, &notify::added_message(&title), ToastKind::Success);
            run_refresh().await;
        }
        Err(e) => {
            log::error!("Add to cart error: {e}");
            notification::show(&doc, notify::ADD_FAILED, ToastKind::Error);
        }
    }

    loading.restore();
}

async fn run_mutation(mutation: CartMutation) {
    let Some(doc) = theme_dom::document() else {
        return;
    };

    // Partial pages may not include the cart widget at all; mutations on
    // them abort silently.
    if theme_dom::query(&doc, selectors::CART_FORM).is_none() {
        log::debug!("No cart form present, ignoring mutation");
        return;
    }
    let input_selector = selectors::quantity_input_for(mutation.key().as_str());
    let Some(input) = theme_dom::query(&doc, &input_selector) else {
        log::debug!("No quantity input for {}, ignoring mutation", mutation.key());
        return;
    };
    let row = theme_dom::closest(&input, selectors::CART_ITEM);
    if let Some(row) = &row {
        theme_dom::add_class(row, selectors::LOADING_CLASS);
    }

    // Write the action's quantity into the input of record before encoding,
    // so the payload always carries the full intended state.
    let previous_value = element::as_input(&input).map(|i| i.value());
    if let Some(i) = element::as_input(&input) {
        i.set_value(&mutation.target_quantity().to_string());
    }
    let mut payload = encode_updates(&doc);
    payload.set(mutation.key().clone(), mutation.target_quantity());

    match api::post_update(&payload).await {
        Ok(snapshot) => {
            if snapshot.is_empty() {
                log::debug!("Cart is now empty");
            }
            // Reload unconditionally: the server-rendered page is the
            // consistency primitive, including the empty-cart template.
            reload_page();
        }
        Err(e) => {
            log::error!("Cart update error: {e}");
            if let Some(row) = &row {
                theme_dom::remove_class(row, selectors::LOADING_CLASS);
            }
            // No reload happens, so put the pre-mutation quantity back.
            if let (Some(i), Some(previous)) = (element::as_input(&input), previous_value) {
                i.set_value(&previous);
            }
            let message = match &mutation {
                CartMutation::Remove { .. } => notify::REMOVE_FAILED,
                CartMutation::Update { .. } => notify::UPDATE_FAILED,
            };
            alert(message);
        }
    }
}

fn reload_page() {
    if let Some(window) = theme_dom::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {e:?}");
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = theme_dom::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Loading state of an add trigger: disabled button, `.btn-text` hidden,
/// `.btn-loading` shown. Restored after the request and the minimum delay.
struct AddTriggerLoading {
    trigger: Element,
    text: Option<HtmlElement>,
    loading: Option<HtmlElement>,
}

impl AddTriggerLoading {
    fn engage(trigger: &Element) -> Self {
        set_disabled(trigger, true);
        let text = child(trigger, selectors::BTN_TEXT);
        let loading = child(trigger, selectors::BTN_LOADING);
        if let Some(text) = &text {
            theme_dom::hide(text);
        }
        if let Some(loading) = &loading {
            let _ = loading.style().set_property("display", "inline");
        }
        Self {
            trigger: trigger.clone(),
            text,
            loading,
        }
    }

    fn restore(self) {
        if let Some(text) = &self.text {
            theme_dom::show(text);
        }
        if let Some(loading) = &self.loading {
            theme_dom::hide(loading);
        }
        set_disabled(&self.trigger, false);
    }
}

fn child(el: &Element, selector: &str) -> Option<HtmlElement> {
    el.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn set_disabled(el: &Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = el.set_attribute("disabled", "");
    } else {
        let _ = el.remove_attribute("disabled");
    }
}

//! Delegated event wiring for the cart.
//!
//! One `click` and one `change` listener on the document root, resolved
//! against the declarative dispatch table with closest-ancestor matching, so
//! rows inserted after initialization work too. Wiring is independent of
//! page state: partial pages without a cart form get live but inert
//! listeners.

use theme_core::notify;
use theme_core::prelude::*;
use theme_dom::{element, selectors};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Document, Element, Event};

use crate::controller::{self, CartController};

/// Install the cart listeners and kick off the initial badge sync.
pub fn init(doc: &Document) -> Result<InitOutcome, JsValue> {
    let dispatcher = Dispatcher::cart_bindings();

    {
        let dispatcher = dispatcher.clone();
        theme_dom::on_document(doc, "click", move |event| {
            handle(&dispatcher, EventKind::Click, &event);
        })?;
    }
    {
        let dispatcher = dispatcher.clone();
        theme_dom::on_document(doc, "change", move |event| {
            handle(&dispatcher, EventKind::Change, &event);
        })?;
    }

    // Late listeners re-render from the event's own count. Only an external
    // dispatch without a detail forces a refetch; the refetch's own event
    // carries a count, so this never recurses further.
    theme_dom::on_document(doc, selectors::CART_UPDATED_EVENT, move |event| {
        on_cart_updated(&event);
    })?;

    CartController::new().refresh_badge();
    Ok(InitOutcome::Ready)
}

fn handle(dispatcher: &Dispatcher, kind: EventKind, event: &Event) {
    let Some(target) = theme_dom::target_element(event) else {
        return;
    };
    for binding in dispatcher.bindings_for(kind) {
        if let Some(matched) = theme_dom::closest(&target, &binding.matcher.selector()) {
            dispatch(binding.handler, matched, event);
            return;
        }
    }
}

fn dispatch(handler: CartHandler, el: Element, event: &Event) {
    let controller = CartController::new();
    match handler {
        CartHandler::AddToCart => {
            // A disabled trigger means an add is already in flight.
            if el.has_attribute("disabled") {
                return;
            }
            event.prevent_default();
            controller.add(el);
        }
        CartHandler::Increase => {
            event.prevent_default();
            step(controller, &el, StepDirection::Increase);
        }
        CartHandler::Decrease => {
            event.prevent_default();
            step(controller, &el, StepDirection::Decrease);
        }
        CartHandler::RemoveItem => {
            event.prevent_default();
            let Some(key) = el.get_attribute(selectors::ATTR_ITEM_KEY) else {
                return;
            };
            if confirm(notify::CONFIRM_REMOVE) {
                controller.remove(ItemKey::new(key));
            }
        }
        CartHandler::QuantityInput => {
            let Some(key) = el.get_attribute(selectors::ATTR_ITEM_KEY) else {
                return;
            };
            let quantity = element::as_input(&el)
                .map(|i| Quantity::parse(&i.value()))
                .unwrap_or(Quantity::ZERO);
            route(controller, ItemKey::new(key), quantity);
        }
    }
}

/// Stepper click: read the row's input of record, step the value, route.
fn step(controller: CartController, button: &Element, direction: StepDirection) {
    let Some(doc) = theme_dom::document() else {
        return;
    };
    let Some(key) = button.get_attribute(selectors::ATTR_ITEM_KEY) else {
        return;
    };
    let Some(input) = theme_dom::query(&doc, &selectors::quantity_input_for(&key)) else {
        return;
    };
    let current = element::as_input(&input)
        .map(|i| Quantity::parse(&i.value()))
        .unwrap_or(Quantity::ZERO);
    route(controller, ItemKey::new(key), direction.apply(current));
}

fn route(controller: CartController, key: ItemKey, quantity: Quantity) {
    match CartMutation::for_quantity(key, quantity) {
        CartMutation::Update { key, quantity } => controller.update_quantity(key, quantity),
        CartMutation::Remove { key } => controller.remove(key),
    }
}

fn on_cart_updated(event: &Event) {
    let count = event
        .dyn_ref::<CustomEvent>()
        .map(|e| e.detail())
        .and_then(|detail| js_sys::Reflect::get(&detail, &"count".into()).ok())
        .and_then(|v| v.as_f64());

    match count {
        Some(count) => {
            if let Some(doc) = theme_dom::document() {
                controller::apply_badge(&doc, &BadgeRender::from_count(count as u32));
            }
        }
        // External dispatch without a detail: fall back to a full refresh.
        None => CartController::new().refresh_badge(),
    }
}

fn confirm(message: &str) -> bool {
    theme_dom::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

//! Event listener installation and custom-event dispatch.
//!
//! Listeners installed here live for the life of the page; the closures are
//! intentionally leaked with `Closure::forget`, which is the usual pattern
//! for document-level wiring that is never torn down.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, Element, Event, EventTarget};

/// Install a permanent delegated listener on the document root.
pub fn on_document(
    doc: &Document,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    on_target(doc, event_type, handler)
}

/// Install a permanent listener on any event target.
pub fn on_target(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// The element an event targeted, if it targeted one.
pub fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Dispatch a bubbling custom event on the document with the given detail.
pub fn dispatch_custom_event(
    doc: &Document,
    name: &str,
    detail: &JsValue,
) -> Result<(), JsValue> {
    let init = CustomEventInit::new();
    init.set_detail(detail);
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    doc.dispatch_event(&event)?;
    Ok(())
}

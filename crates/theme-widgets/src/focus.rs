//! Tab-key focus trap for modal-ish surfaces.
//!
//! While installed, Tab from the last focusable element wraps to the first
//! and Shift+Tab from the first wraps to the last. The handle removes its
//! listener on [`FocusTrap::remove`]; dropping it without removing leaks the
//! listener for the life of the page, which the callers never do.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, KeyboardEvent};

/// An installed focus trap on one container.
pub struct FocusTrap {
    container: Element,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl FocusTrap {
    /// Trap Tab navigation inside the container.
    pub fn install(container: &Element) -> Result<Self, JsValue> {
        let inner = container.clone();
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            let focusables = theme_dom::element::focusables(&inner);
            let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
                return;
            };
            let Some(active) = theme_dom::document().and_then(|d| d.active_element()) else {
                return;
            };
            if event.shift_key() {
                if active.is_same_node(Some(first.as_ref())) {
                    event.prevent_default();
                    let _ = last.focus();
                }
            } else if active.is_same_node(Some(last.as_ref())) {
                event.prevent_default();
                let _ = first.focus();
            }
        });
        container
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            container: container.clone(),
            closure,
        })
    }

    /// Remove the trap's listener.
    pub fn remove(self) {
        let _ = self.container.remove_event_listener_with_callback(
            "keydown",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

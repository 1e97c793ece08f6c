//! Singleton toast notification.
//!
//! At most one `.ios-cart-notification` element exists at a time: a new toast
//! evicts the previous one. The stylesheet is injected once on first use and
//! the toast tears itself down after three seconds via a reverse animation.
//! Toasts are purely visual and not part of the live region model.

use theme_core::notify::ToastKind;
use theme_dom::selectors;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

const DISMISS_AFTER_MS: u32 = 3_000;
const TEARDOWN_ANIMATION_MS: u32 = 300;

const TOAST_STYLES: &str = r#"
  .ios-cart-notification {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 16px 24px;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    z-index: 10000;
    animation: ios-notification-slide-in 0.3s ease-out;
    max-width: 400px;
    font-size: 14px;
    line-height: 1.5;
  }
  .ios-cart-notification-success {
    background-color: #10b981;
    color: white;
  }
  .ios-cart-notification-error {
    background-color: #ef4444;
    color: white;
  }
  @keyframes ios-notification-slide-in {
    from {
      transform: translateX(100%);
      opacity: 0;
    }
    to {
      transform: translateX(0);
      opacity: 1;
    }
  }
  @media (max-width: 768px) {
    .ios-cart-notification {
      top: 10px;
      right: 10px;
      left: 10px;
      max-width: none;
    }
  }
"#;

/// Show a toast, replacing any toast currently on screen.
pub fn show(doc: &Document, message: &str, kind: ToastKind) {
    // Evict the singleton.
    if let Some(existing) = theme_dom::query(doc, &format!(".{}", selectors::NOTIFICATION_CLASS)) {
        existing.remove();
    }

    ensure_styles(doc);

    let Ok(toast) = doc.create_element("div") else {
        log::warn!("Could not create notification element");
        return;
    };
    toast.set_class_name(&format!(
        "{} {}",
        selectors::NOTIFICATION_CLASS,
        kind.css_class()
    ));
    toast.set_text_content(Some(message));

    let Some(body) = doc.body() else { return };
    if body.append_child(&toast).is_err() {
        return;
    }

    // Auto-dismiss. If a newer toast evicted this one in the meantime the
    // element is already detached and `remove` is a no-op.
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
        if let Some(html) = theme_dom::element::as_html(&toast) {
            let _ = html
                .style()
                .set_property("animation", "ios-notification-slide-in 0.3s ease-out reverse");
        }
        gloo_timers::future::TimeoutFuture::new(TEARDOWN_ANIMATION_MS).await;
        toast.remove();
    });
}

/// Inject the toast stylesheet once.
fn ensure_styles(doc: &Document) {
    if doc
        .get_element_by_id(selectors::NOTIFICATION_STYLE_ID)
        .is_some()
    {
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_id(selectors::NOTIFICATION_STYLE_ID);
    style.set_text_content(Some(TOAST_STYLES));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}

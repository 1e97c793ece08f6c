//! Media helpers: lazy image loading, broken-image hiding, and the CTA
//! loading state.
//!
//! Lazy loading is opportunistic: images carrying `data-src` get their real
//! source when they first intersect the viewport, and the whole feature is
//! skipped on browsers without `IntersectionObserver`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry};

const LAZY_SELECTOR: &str = "img[data-src]";
const CTA_SELECTOR: &str = ".ios-btn[href*=\"launchheld.com\"]";
const CTA_LOADING_CLASS: &str = "loading";
const CTA_LOADING_TEXT: &str = "Loading...";
const CTA_REVERT_MS: u32 = 3_000;

/// Wire all media behaviors. Returns how many images are observed lazily.
pub fn init(doc: &Document) -> Result<usize, JsValue> {
    hide_broken_images(doc)?;
    wire_cta_buttons(doc)?;
    observe_lazy_images(doc)
}

/// A broken image is worse than no image.
fn hide_broken_images(doc: &Document) -> Result<(), JsValue> {
    for img in theme_dom::query_all(doc, "img") {
        let img_ref = img.clone();
        theme_dom::on_target(&img, "error", move |_event: Event| {
            if let Some(html) = theme_dom::element::as_html(&img_ref) {
                theme_dom::hide(html);
            }
            if let Some(src) = img_ref.get_attribute("src") {
                log::debug!("Failed to load image: {src}");
            }
        })?;
    }
    Ok(())
}

/// CTA buttons flip to a loading state on click and revert after a timeout
/// in case navigation never happens.
fn wire_cta_buttons(doc: &Document) -> Result<(), JsValue> {
    for btn in theme_dom::query_all(doc, CTA_SELECTOR) {
        let btn_ref = btn.clone();
        theme_dom::on_target(&btn, "click", move |_event: Event| {
            if theme_dom::has_class(&btn_ref, CTA_LOADING_CLASS) {
                return;
            }
            theme_dom::add_class(&btn_ref, CTA_LOADING_CLASS);
            let original = btn_ref.text_content().unwrap_or_default();
            btn_ref.set_text_content(Some(CTA_LOADING_TEXT));

            let btn_ref = btn_ref.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(CTA_REVERT_MS).await;
                btn_ref.set_text_content(Some(&original));
                theme_dom::remove_class(&btn_ref, CTA_LOADING_CLASS);
            });
        })?;
    }
    Ok(())
}

fn observe_lazy_images(doc: &Document) -> Result<usize, JsValue> {
    let Some(window) = theme_dom::window() else {
        return Ok(0);
    };
    // Feature detection; old browsers simply load images eagerly.
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
        return Ok(0);
    }

    let lazy = theme_dom::query_all(doc, LAZY_SELECTOR);
    if lazy.is_empty() {
        return Ok(0);
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                load_lazy_image(&target);
                observer.unobserve(&target);
            }
        },
    );

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    let count = lazy.len();
    for img in &lazy {
        observer.observe(img);
    }
    Ok(count)
}

fn load_lazy_image(target: &Element) {
    let Some(img) = target.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    if let Some(src) = target.get_attribute("data-src") {
        img.set_src(&src);
        let _ = target.remove_attribute("data-src");
    }
}

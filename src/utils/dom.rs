//! Small DOM helpers shared by components.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Applies or releases the document-level scroll lock. Callers go through
/// the overlay registry rather than here, so the lock is only released when
/// no overlay remains open.
pub fn set_scroll_lock(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// A deferred UI action that can be superseded or cancelled before it
/// fires. Scheduling drops any still-pending timeout, so the last schedule
/// wins and a close can cancel a pending open/focus.
#[derive(Default)]
pub struct PendingAction(Option<Timeout>);

impl PendingAction {
    pub fn schedule(&mut self, delay_ms: u32, action: impl FnOnce() + 'static) {
        self.0 = Some(Timeout::new(delay_ms, action));
    }

    pub fn cancel(&mut self) {
        self.0 = None;
    }
}

/// Promotes `data-src` images. Browsers with native lazy loading get the
/// real source immediately; elsewhere a one-shot observer loads each image
/// as it approaches the viewport.
pub fn init_lazy_images() {
    let Some(document) = document() else { return };

    let native = document
        .create_element("img")
        .ok()
        .map(|probe| Reflect::has(probe.as_ref(), &"loading".into()).unwrap_or(false))
        .unwrap_or(false);

    if native {
        if let Ok(images) = document.query_selector_all("img[loading=\"lazy\"][data-src]") {
            for i in 0..images.length() {
                let Some(img) = images
                    .item(i)
                    .and_then(|n| n.dyn_into::<HtmlImageElement>().ok())
                else {
                    continue;
                };
                if let Some(src) = img.get_attribute("data-src") {
                    img.set_src(&src);
                }
            }
        }
        return;
    }

    let observer = crate::components::reveal::observe_once(
        "img[data-src]",
        None,
        |target: &Element, observer: &IntersectionObserver| {
            if let Ok(img) = target.clone().dyn_into::<HtmlImageElement>() {
                if let Some(src) = img.get_attribute("data-src") {
                    img.set_src(&src);
                }
                let _ = img.class_list().add_1("loaded");
            }
            observer.unobserve(target);
        },
    );
    // The fallback observer lives for the page lifetime.
    if let Some(observer) = observer {
        observer.forget();
    }
}

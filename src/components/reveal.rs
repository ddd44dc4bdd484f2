//! One-shot scroll reveal animations.
//!
//! Elements flagged with `data-animate` get `is-visible` the first time 10%
//! of them enters the viewport (with a 50px bottom deflation), then stop
//! being observed.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::utils::dom;

/// Keeps the observer and its callback alive together.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn disconnect(self) {
        self.observer.disconnect();
        drop(self.callback);
    }

    /// Leaks the callback so the observer can outlive the caller.
    pub fn forget(self) {
        self.callback.forget();
    }
}

/// Observes every element matching `selector` and runs `on_intersect` for
/// each entry that reports itself intersecting. `options` is an optional
/// `(threshold, root_margin)` pair.
pub fn observe_once(
    selector: &str,
    options: Option<(f64, &str)>,
    on_intersect: impl Fn(&Element, &IntersectionObserver) + 'static,
) -> Option<ObserverHandle> {
    let document = dom::document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_intersect(&entry.target(), &observer);
                }
            }
        },
    );

    let observer = if let Some((threshold, root_margin)) = options {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?
    } else {
        IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?
    };

    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&el);
            }
        }
    }

    Some(ObserverHandle { observer, callback })
}

/// Wires the reveal observer on mount and tears it down with the page.
#[hook]
pub fn use_reveal_animations() {
    use_effect_with_deps(
        |_| {
            let handle = observe_once(
                "[data-animate]",
                Some((0.1, "0px 0px -50px 0px")),
                |target, observer| {
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(target);
                },
            );
            move || {
                if let Some(handle) = handle {
                    handle.disconnect();
                }
            }
        },
        (),
    );
}

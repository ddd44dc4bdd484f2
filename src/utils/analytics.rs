//! Fire-and-forget event reporting to the global `gtag` collaborator.
//!
//! The collaborator may be absent (script blocked, local build); every
//! tracking call is then a silent no-op, mirroring the page's `typeof gtag`
//! guard. Failures from the call itself are ignored.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};

use crate::state::ApplicationId;

/// One tracked interaction, shaped as a GA event payload.
pub struct AnalyticsEvent<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub label: &'a str,
    /// Extra string field, e.g. `("link_url", href)` or `("modal_id", id)`.
    pub extra: Option<(&'a str, &'a str)>,
    pub value: Option<u32>,
}

fn gtag() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn track(event: AnalyticsEvent<'_>) {
    let Some(gtag) = gtag() else { return };

    let params = Object::new();
    let _ = Reflect::set(
        &params,
        &"event_category".into(),
        &event.category.into(),
    );
    let _ = Reflect::set(&params, &"event_label".into(), &event.label.into());
    if let Some((key, value)) = event.extra {
        let _ = Reflect::set(&params, &key.into(), &value.into());
    }
    if let Some(value) = event.value {
        let _ = Reflect::set(&params, &"value".into(), &JsValue::from_f64(value as f64));
    }

    if gtag
        .call3(&JsValue::NULL, &"event".into(), &event.name.into(), &params)
        .is_err()
    {
        gloo_console::log!("gtag call failed; event dropped:", event.name);
    }
}

pub fn track_contact_click(label: &str, href: &str) {
    track(AnalyticsEvent {
        name: "contact_click",
        category: "Contact",
        label,
        extra: Some(("link_url", href)),
        value: None,
    });
}

pub fn track_external_link(label: &str, href: &str) {
    track(AnalyticsEvent {
        name: "external_link_click",
        category: "Outbound",
        label,
        extra: Some(("link_url", href)),
        value: None,
    });
}

pub fn track_application_open(app: ApplicationId) {
    track(AnalyticsEvent {
        name: "application_modal_open",
        category: "Application",
        label: app.title(),
        extra: Some(("modal_id", app.modal_dom_id())),
        value: None,
    });
}

pub fn track_faq_click(question: &str, category: &str) {
    track(AnalyticsEvent {
        name: "faq_click",
        category: "FAQ",
        label: question,
        extra: Some(("category", category)),
        value: None,
    });
}

pub fn track_scroll_depth(step: u32) {
    let label = format!("{step}%");
    track(AnalyticsEvent {
        name: "scroll_depth",
        category: "Engagement",
        label: &label,
        extra: None,
        value: Some(step),
    });
}

pub fn track_video_load() {
    track(AnalyticsEvent {
        name: "video_load",
        category: "Video",
        label: "YouTube Video",
        extra: None,
        value: None,
    });
}

pub fn track_model_load() {
    track(AnalyticsEvent {
        name: "3d_model_load",
        category: "3D Model",
        label: "Product Viewer",
        extra: None,
        value: None,
    });
}

pub fn track_model_toggle(label: &str) {
    track(AnalyticsEvent {
        name: "3d_model_toggle",
        category: "3D Model",
        label,
        extra: None,
        value: None,
    });
}

//! Shared modal machinery: focus containment, escape handling and deferred
//! focus moves.
//!
//! Escape intentionally has two independent handlers with different
//! semantics: the contact and FAQ modals each close individually, while the
//! application modals close all at once.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::state::{ModalId, UiAction, UiHandle};
use crate::utils::dom;

/// Focusable elements inside the contact and application modals.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// The FAQ modal also cycles through its disclosure summaries.
pub const FAQ_FOCUSABLE_SELECTOR: &str =
    "button, [href], details summary, [tabindex]:not([tabindex=\"-1\"])";

fn selector_for(id: ModalId) -> &'static str {
    match id {
        ModalId::Faq => FAQ_FOCUSABLE_SELECTOR,
        _ => FOCUSABLE_SELECTOR,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TrapJump {
    ToFirst,
    ToLast,
}

/// Tab-wrap decision: jump only from the first element backwards or the
/// last element forwards. Every other position tabs normally.
pub fn trap_jump(at_first: bool, at_last: bool, shift: bool) -> Option<TrapJump> {
    if shift && at_first {
        Some(TrapJump::ToLast)
    } else if !shift && at_last {
        Some(TrapJump::ToFirst)
    } else {
        None
    }
}

/// Recomputes the modal's focusable sequence and wraps focus at its edges.
/// The sequence is read from the DOM on every Tab press, so content that
/// appeared since the modal opened is picked up.
fn contain_tab(modal_dom_id: &str, selector: &str, event: &KeyboardEvent) {
    let Some(modal) = dom::element_by_id(modal_dom_id) else {
        return;
    };
    let Ok(nodes) = modal.query_selector_all(selector) else {
        return;
    };
    let len = nodes.length();
    if len == 0 {
        return;
    }
    let first = nodes.item(0).and_then(|n| n.dyn_into::<HtmlElement>().ok());
    let last = nodes
        .item(len - 1)
        .and_then(|n| n.dyn_into::<HtmlElement>().ok());
    let (Some(first), Some(last)) = (first, last) else {
        return;
    };

    let active = dom::document().and_then(|d| d.active_element());
    let at_first = active
        .as_ref()
        .map(|a| a == first.unchecked_ref::<Element>())
        .unwrap_or(false);
    let at_last = active
        .as_ref()
        .map(|a| a == last.unchecked_ref::<Element>())
        .unwrap_or(false);

    match trap_jump(at_first, at_last, event.shift_key()) {
        Some(TrapJump::ToLast) => {
            event.prevent_default();
            let _ = last.focus();
        }
        Some(TrapJump::ToFirst) => {
            event.prevent_default();
            let _ = first.focus();
        }
        None => {}
    }
}

/// Registers a document-level keydown listener for as long as `deps` stays
/// unchanged, removing it on re-render and teardown.
#[hook]
pub fn use_document_keydown<D, F>(deps: D, handler: F)
where
    D: PartialEq + 'static,
    F: Fn(KeyboardEvent) + 'static,
{
    use_effect_with_deps(
        move |_| {
            let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(handler);
            let document = dom::document();
            if let Some(document) = &document {
                let _ = document
                    .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
            }
            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                drop(callback);
            }
        },
        deps,
    );
}

/// Escape closes the contact and FAQ modals, each only if currently open.
#[hook]
pub fn use_primary_escape(ui: UiHandle) {
    let contact_open = ui.overlays.is_open(ModalId::Contact);
    let faq_open = ui.overlays.is_open(ModalId::Faq);
    let dispatcher = ui.dispatcher();

    use_document_keydown((contact_open, faq_open), move |event| {
        if event.key() != "Escape" {
            return;
        }
        if contact_open {
            dispatcher.dispatch(UiAction::Close(ModalId::Contact));
        }
        if faq_open {
            dispatcher.dispatch(UiAction::Close(ModalId::Faq));
        }
    });
}

/// Independent escape handler for the application modals: closes all of
/// them, open or not.
#[hook]
pub fn use_application_escape(ui: UiHandle) {
    let dispatcher = ui.dispatcher();
    use_document_keydown((), move |event| {
        if event.key() == "Escape" {
            dispatcher.dispatch(UiAction::CloseApplications);
        }
    });
}

/// Tab containment for every open modal. The lightbox has no trap.
#[hook]
pub fn use_focus_trap(ui: UiHandle) {
    let trapped: Vec<ModalId> = ui
        .overlays
        .iter_open()
        .filter(|id| *id != ModalId::Lightbox)
        .collect();

    use_document_keydown(trapped.clone(), move |event| {
        if event.key() != "Tab" {
            return;
        }
        for id in &trapped {
            contain_tab(id.dom_id(), selector_for(*id), &event);
        }
    });
}

/// Moves focus to `target_id` shortly after `open` turns true, giving the
/// open animation time to settle. Closing cancels a move that has not fired
/// yet, and reopening supersedes a stale one.
#[hook]
pub fn use_deferred_focus(open: bool, target_id: &'static str) {
    let pending = use_mut_ref(dom::PendingAction::default);

    use_effect_with_deps(
        move |open: &bool| {
            if *open {
                pending.borrow_mut().schedule(config::FOCUS_DELAY_MS, move || {
                    if let Some(el) = dom::html_element_by_id(target_id) {
                        let _ = el.focus();
                    }
                });
            } else {
                pending.borrow_mut().cancel();
            }
            || ()
        },
        open,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_only_at_the_edges() {
        assert_eq!(trap_jump(true, false, true), Some(TrapJump::ToLast));
        assert_eq!(trap_jump(false, true, false), Some(TrapJump::ToFirst));
        // Mid-sequence tabbing is left to the browser.
        assert_eq!(trap_jump(false, false, false), None);
        assert_eq!(trap_jump(false, false, true), None);
        // Forward from the first element and backward from the last are
        // ordinary moves inside the sequence.
        assert_eq!(trap_jump(true, false, false), None);
        assert_eq!(trap_jump(false, true, true), None);
    }

    #[test]
    fn single_element_modal_keeps_focus_on_it() {
        assert_eq!(trap_jump(true, true, false), Some(TrapJump::ToFirst));
        assert_eq!(trap_jump(true, true, true), Some(TrapJump::ToLast));
    }
}

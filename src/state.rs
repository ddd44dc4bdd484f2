//! Shared UI state for the page: which overlays are open, who holds the
//! body scroll lock, and pending FAQ category navigation.
//!
//! All overlay state lives in one reducer handed to components through
//! context, so ownership is explicit instead of scattered module globals.

use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::utils::dom;

/// Per-application detail panels.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ApplicationId {
    Welding,
    Grinding,
    Laboratory,
}

impl ApplicationId {
    pub const ALL: [ApplicationId; 3] = [
        ApplicationId::Welding,
        ApplicationId::Grinding,
        ApplicationId::Laboratory,
    ];

    /// DOM id of the modal element, used by the focus trap.
    pub fn modal_dom_id(self) -> &'static str {
        match self {
            ApplicationId::Welding => "appModalWelding",
            ApplicationId::Grinding => "appModalGrinding",
            ApplicationId::Laboratory => "appModalLaboratory",
        }
    }

    /// DOM id of the modal's close button, the deferred-focus target.
    pub fn close_button_dom_id(self) -> &'static str {
        match self {
            ApplicationId::Welding => "appModalWeldingClose",
            ApplicationId::Grinding => "appModalGrindingClose",
            ApplicationId::Laboratory => "appModalLaboratoryClose",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ApplicationId::Welding => "溶接ヒューム回収",
            ApplicationId::Grinding => "研削・研磨粉じん対策",
            ApplicationId::Laboratory => "実験室・分析室の局所排気",
        }
    }
}

/// FAQ categories addressable from the category navigation buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FaqCategory {
    Product,
    Installation,
    Maintenance,
    Purchase,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::Product,
        FaqCategory::Installation,
        FaqCategory::Maintenance,
        FaqCategory::Purchase,
    ];

    /// DOM id of the category heading inside the FAQ modal content.
    pub fn heading_dom_id(self) -> &'static str {
        match self {
            FaqCategory::Product => "faqCategoryProduct",
            FaqCategory::Installation => "faqCategoryInstallation",
            FaqCategory::Maintenance => "faqCategoryMaintenance",
            FaqCategory::Purchase => "faqCategoryPurchase",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FaqCategory::Product => "製品について",
            FaqCategory::Installation => "設置・取付について",
            FaqCategory::Maintenance => "メンテナンス",
            FaqCategory::Purchase => "ご購入・納期",
        }
    }
}

/// Identity of every overlay that can hold the body scroll lock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ModalId {
    Contact,
    Faq,
    Application(ApplicationId),
    Lightbox,
}

impl ModalId {
    /// DOM id of the dialog element for overlays with a focus trap.
    pub fn dom_id(self) -> &'static str {
        match self {
            ModalId::Contact => "contactModal",
            ModalId::Faq => "faqModal",
            ModalId::Application(app) => app.modal_dom_id(),
            ModalId::Lightbox => "galleryLightbox",
        }
    }
}

/// Registry of open overlays. The body scroll lock is held exactly while
/// this set is non-empty, so closing one modal while another is still open
/// cannot release the lock early.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Overlays {
    open: BTreeSet<ModalId>,
}

impl Overlays {
    /// Idempotent open. Returns whether the set changed.
    pub fn open(&mut self, id: ModalId) -> bool {
        self.open.insert(id)
    }

    /// Idempotent close. Returns whether the set changed.
    pub fn close(&mut self, id: ModalId) -> bool {
        self.open.remove(&id)
    }

    /// Closes every application modal. Returns whether the set changed.
    pub fn close_applications(&mut self) -> bool {
        let before = self.open.len();
        self.open
            .retain(|id| !matches!(id, ModalId::Application(_)));
        self.open.len() != before
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }

    /// Whether any overlay holds the scroll lock.
    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Open overlays in their fixed trap order.
    pub fn iter_open(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.open.iter().copied()
    }
}

pub enum UiAction {
    Open(ModalId),
    Close(ModalId),
    /// Escape semantics for application modals: close all of them at once.
    CloseApplications,
    /// Open the FAQ modal (if needed) and remember which category heading
    /// its content should scroll to once settled.
    NavigateFaq(FaqCategory),
    /// The FAQ modal consumed the pending category target.
    FaqTargetDone,
}

#[derive(Clone, PartialEq, Default)]
pub struct UiState {
    pub overlays: Overlays,
    pub faq_target: Option<FaqCategory>,
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: UiAction) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            UiAction::Open(id) => next.overlays.open(id),
            UiAction::Close(id) => next.overlays.close(id),
            UiAction::CloseApplications => next.overlays.close_applications(),
            UiAction::NavigateFaq(category) => {
                next.overlays.open(ModalId::Faq);
                next.faq_target = Some(category);
                true
            }
            UiAction::FaqTargetDone => next.faq_target.take().is_some(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub type UiHandle = UseReducerHandle<UiState>;

#[derive(Properties, PartialEq)]
pub struct UiProviderProps {
    pub children: Children,
}

/// Owns the reducer and applies the body scroll lock whenever the overlay
/// set transitions between empty and non-empty.
#[function_component(UiProvider)]
pub fn ui_provider(props: &UiProviderProps) -> Html {
    let ui = use_reducer(UiState::default);

    {
        let locked = ui.overlays.any_open();
        use_effect_with_deps(
            move |locked: &bool| {
                dom::set_scroll_lock(*locked);
                || ()
            },
            locked,
        );
    }

    html! {
        <ContextProvider<UiHandle> context={ui}>
            { for props.children.iter() }
        </ContextProvider<UiHandle>>
    }
}

#[hook]
pub fn use_ui() -> UiHandle {
    use_context::<UiHandle>().expect("UiProvider is mounted above every page component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_lock_follows_the_overlay_set() {
        let mut overlays = Overlays::default();
        assert!(!overlays.any_open());

        assert!(overlays.open(ModalId::Contact));
        assert!(overlays.any_open());

        // A second overlay keeps the lock held after the first closes.
        overlays.open(ModalId::Faq);
        overlays.close(ModalId::Contact);
        assert!(overlays.any_open());

        overlays.close(ModalId::Faq);
        assert!(!overlays.any_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut overlays = Overlays::default();
        assert!(overlays.open(ModalId::Faq));
        assert!(!overlays.open(ModalId::Faq));
        assert!(overlays.close(ModalId::Faq));
        assert!(!overlays.close(ModalId::Faq));
        assert!(!overlays.any_open());
    }

    #[test]
    fn close_applications_leaves_other_overlays_alone() {
        let mut overlays = Overlays::default();
        overlays.open(ModalId::Contact);
        overlays.open(ModalId::Application(ApplicationId::Welding));
        overlays.open(ModalId::Application(ApplicationId::Grinding));

        assert!(overlays.close_applications());
        assert!(overlays.is_open(ModalId::Contact));
        assert!(!overlays.is_open(ModalId::Application(ApplicationId::Welding)));
        // Nothing left to close.
        assert!(!overlays.close_applications());
    }

    #[test]
    fn navigate_faq_opens_the_modal_and_records_the_target() {
        let state = Rc::new(UiState::default());
        let state = state.reduce(UiAction::NavigateFaq(FaqCategory::Maintenance));
        assert!(state.overlays.is_open(ModalId::Faq));
        assert_eq!(state.faq_target, Some(FaqCategory::Maintenance));

        let state = state.reduce(UiAction::FaqTargetDone);
        assert!(state.overlays.is_open(ModalId::Faq));
        assert_eq!(state.faq_target, None);
    }
}

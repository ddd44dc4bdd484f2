//! Exercises the pure state machines behind the page: the overlay registry
//! and scroll lock, modal reducer transitions, gallery navigation, scroll
//! depth bookkeeping and form validation.

use std::rc::Rc;

use supportarm_landing::components::applications::{close_behavior, CloseBehavior};
use supportarm_landing::components::contact::{is_valid_email, validate_contact};
use supportarm_landing::components::gallery::{
    gallery_items, step_index, visible_indices, GalleryFilter, PartCategory,
};
use supportarm_landing::components::modal::{trap_jump, TrapJump};
use supportarm_landing::state::{
    ApplicationId, FaqCategory, ModalId, Overlays, UiAction, UiState,
};
use supportarm_landing::utils::scroll::{scroll_percent, ScrollDepthTracker};

use yew::functional::Reducible;

#[test]
fn open_then_close_restores_the_scroll_lock_for_every_modal() {
    let identities = [
        ModalId::Contact,
        ModalId::Faq,
        ModalId::Application(ApplicationId::Welding),
        ModalId::Application(ApplicationId::Grinding),
        ModalId::Application(ApplicationId::Laboratory),
        ModalId::Lightbox,
    ];
    for id in identities {
        let mut overlays = Overlays::default();
        let before = overlays.any_open();
        overlays.open(id);
        overlays.close(id);
        assert_eq!(overlays.any_open(), before, "lock leaked for {id:?}");
    }
}

#[test]
fn overlapping_modals_release_the_lock_only_when_all_close() {
    let mut overlays = Overlays::default();
    overlays.open(ModalId::Faq);
    overlays.open(ModalId::Application(ApplicationId::Welding));

    overlays.close(ModalId::Faq);
    assert!(
        overlays.any_open(),
        "closing one modal must not release a lock another still holds"
    );

    overlays.close_applications();
    assert!(!overlays.any_open());
}

#[test]
fn reducer_escape_sequence_closes_contact_and_faq_independently() {
    let state = Rc::new(UiState::default());
    let state = state.reduce(UiAction::Open(ModalId::Contact));
    let state = state.reduce(UiAction::Open(ModalId::Faq));

    // The contact/FAQ escape handler closes each modal individually.
    let state = state.reduce(UiAction::Close(ModalId::Contact));
    assert!(!state.overlays.is_open(ModalId::Contact));
    assert!(state.overlays.is_open(ModalId::Faq));

    let state = state.reduce(UiAction::Close(ModalId::Faq));
    assert!(!state.overlays.any_open());
}

#[test]
fn reducer_application_escape_closes_all_panels_at_once() {
    let state = Rc::new(UiState::default());
    let state = state.reduce(UiAction::Open(ModalId::Application(ApplicationId::Welding)));
    let state = state.reduce(UiAction::Open(ModalId::Application(
        ApplicationId::Laboratory,
    )));
    let state = state.reduce(UiAction::Open(ModalId::Contact));

    let state = state.reduce(UiAction::CloseApplications);
    for app in ApplicationId::ALL {
        assert!(!state.overlays.is_open(ModalId::Application(app)));
    }
    // The other handler's modals are untouched.
    assert!(state.overlays.is_open(ModalId::Contact));
}

#[test]
fn category_click_while_closed_opens_the_modal_then_scrolls() {
    let state = Rc::new(UiState::default());
    assert!(!state.overlays.is_open(ModalId::Faq));

    let state = state.reduce(UiAction::NavigateFaq(FaqCategory::Purchase));
    assert!(state.overlays.is_open(ModalId::Faq));
    assert_eq!(state.faq_target, Some(FaqCategory::Purchase));

    // The modal consumes the target once the deferred scroll is scheduled;
    // the modal stays open.
    let state = state.reduce(UiAction::FaqTargetDone);
    assert!(state.overlays.is_open(ModalId::Faq));
    assert_eq!(state.faq_target, None);
}

#[test]
fn focus_wraps_from_the_edges_and_nowhere_else() {
    assert_eq!(trap_jump(true, false, true), Some(TrapJump::ToLast));
    assert_eq!(trap_jump(false, true, false), Some(TrapJump::ToFirst));
    assert_eq!(trap_jump(false, false, true), None);
    assert_eq!(trap_jump(false, false, false), None);
}

#[test]
fn filtering_selects_exactly_the_matching_categories() {
    let items = gallery_items();
    for filter in GalleryFilter::ALL_FILTERS {
        let visible = visible_indices(items, filter);
        for (index, item) in items.iter().enumerate() {
            let expected = match filter {
                GalleryFilter::All => true,
                GalleryFilter::Category(category) => item.category == category,
            };
            assert_eq!(visible.contains(&index), expected);
        }
    }
}

#[test]
fn lightbox_navigation_is_cyclic() {
    let visible = visible_indices(
        gallery_items(),
        GalleryFilter::Category(PartCategory::Arm),
    );
    let len = visible.len();
    assert!(len > 0);

    let start = 1 % len;
    let mut position = start;
    for _ in 0..len {
        position = step_index(position, len, 1).unwrap();
    }
    assert_eq!(position, start);
}

#[test]
fn lightbox_scenario_three_items_from_the_middle() {
    // Visible sequence [A, B, C], opened at B.
    assert_eq!(step_index(1, 3, 1), Some(2));
    assert_eq!(step_index(2, 3, 1), Some(0));
}

#[test]
fn lightbox_on_an_empty_sequence_does_not_move() {
    assert_eq!(step_index(0, 0, 1), None);
    assert_eq!(step_index(0, 0, -1), None);
}

#[test]
fn scroll_depth_fires_each_threshold_once() {
    let mut tracker = ScrollDepthTracker::default();
    let mut fired = Vec::new();
    // Jittery scrolling that crosses thresholds repeatedly.
    for percent in [10, 26, 24, 30, 55, 40, 80, 99, 100, 100] {
        fired.extend(tracker.crossed(percent));
    }
    assert_eq!(fired, vec![25, 50, 75, 100]);
}

#[test]
fn scroll_depth_needs_a_scrollable_document() {
    assert_eq!(scroll_percent(0.0, 800.0, 800.0), None);
    assert_eq!(scroll_percent(500.0, 1800.0, 800.0), Some(50));
}

#[test]
fn empty_name_blocks_submission() {
    assert!(validate_contact("", "x@y.com", "hi").is_err());
}

#[test]
fn valid_fields_pass_validation() {
    assert!(validate_contact("山田", "x@y.com", "hi").is_ok());
    assert!(is_valid_email("sales@support-arm.co.jp"));
}

#[test]
fn application_close_triggers_follow_the_link_kind() {
    assert_eq!(
        close_behavior(true, Some("https://www.youtube.com/watch?v=abc")),
        CloseBehavior::AllowNavigateThenClose
    );
    assert_eq!(
        close_behavior(true, Some("#gallery")),
        CloseBehavior::AllowNavigateThenClose
    );
    assert_eq!(
        close_behavior(true, Some("mailto:sales@example.com")),
        CloseBehavior::CloseImmediately
    );
    assert_eq!(close_behavior(false, None), CloseBehavior::CloseImmediately);
}

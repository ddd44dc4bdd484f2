//! FAQ modal with category navigation, plus the page section that opens it.

use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::faq::{entries, FaqItem};
use crate::config;
use crate::state::{use_ui, FaqCategory, ModalId, UiAction};
use crate::utils::dom;

/// Scrolls the modal content so the category heading sits below the modal
/// header with a small gap, and flashes a background highlight as a cue.
fn scroll_content_to_category(category: FaqCategory) {
    let Some(content) = dom::element_by_id("faqModalContent") else {
        return;
    };
    let Some(heading) = dom::html_element_by_id(category.heading_dom_id()) else {
        return;
    };

    let header_height = dom::html_element_by_id("faqModalHeader")
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0);
    let top = heading.offset_top() as f64 - header_height - config::SCROLL_GAP_PX;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    content.scroll_to_with_scroll_to_options(&options);

    // Pure animation: briefly tint the heading, then clear it.
    let style = heading.style();
    let _ = style.set_property("transition", "background-color 0.3s ease");
    let _ = style.set_property("background-color", "rgba(139, 35, 53, 0.1)");
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(config::CATEGORY_HIGHLIGHT_MS).await;
        let _ = heading.style().remove_property("background-color");
    });
}

#[function_component(FaqModal)]
pub fn faq_modal() -> Html {
    let ui = use_ui();
    let open = ui.overlays.is_open(ModalId::Faq);
    let target = ui.faq_target;

    // One owner for deferred content scrolls: a category navigation
    // supersedes the plain scroll-to-top reset, and closing cancels both.
    let pending_scroll = use_mut_ref(dom::PendingAction::default);
    let pending_swap = use_mut_ref(dom::PendingAction::default);
    let was_open = use_mut_ref(|| false);

    {
        let pending_scroll = pending_scroll.clone();
        let was_open = was_open.clone();
        let dispatcher = ui.dispatcher();
        use_effect_with_deps(
            move |(open, target): &(bool, Option<FaqCategory>)| {
                let just_opened = *open && !*was_open.borrow();
                *was_open.borrow_mut() = *open;

                if *open {
                    match target {
                        Some(category) => {
                            let category = *category;
                            pending_scroll
                                .borrow_mut()
                                .schedule(config::CATEGORY_SETTLE_DELAY_MS, move || {
                                    scroll_content_to_category(category);
                                });
                            dispatcher.dispatch(UiAction::FaqTargetDone);
                        }
                        None if just_opened => {
                            // Plain open: content starts back at the top.
                            pending_scroll
                                .borrow_mut()
                                .schedule(config::CATEGORY_SETTLE_DELAY_MS, || {
                                    if let Some(content) = dom::element_by_id("faqModalContent") {
                                        content.set_scroll_top(0);
                                    }
                                });
                        }
                        None => {}
                    }
                } else {
                    pending_scroll.borrow_mut().cancel();
                }
                || ()
            },
            (open, target),
        );
    }

    let close = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            ui.dispatch(UiAction::Close(ModalId::Faq));
        })
    };

    // Hand off to the contact modal: close this one first, open the other
    // after the overlay animation has cleared.
    let contact_handoff = {
        let ui = ui.clone();
        let pending_swap = pending_swap.clone();
        Callback::from(move |_: MouseEvent| {
            ui.dispatch(UiAction::Close(ModalId::Faq));
            let dispatcher = ui.dispatcher();
            pending_swap
                .borrow_mut()
                .schedule(config::MODAL_SWAP_DELAY_MS, move || {
                    dispatcher.dispatch(UiAction::Open(ModalId::Contact));
                });
        })
    };

    html! {
        <>
        if open {
            <div id="faqModal" class="modal faq-modal is-open" role="dialog" aria-modal="true" aria-labelledby="faqModalTitle">
                <div class="modal__overlay" onclick={close.clone()}></div>
                <div class="modal__dialog faq-modal__dialog">
                    <div id="faqModalHeader" class="faq-modal__header">
                        <h2 id="faqModalTitle" class="modal__title">{"よくあるご質問"}</h2>
                        <button id="closeFaqModalBtn" class="modal__close" aria-label="閉じる" onclick={close}>{"×"}</button>
                    </div>
                    <div id="faqModalContent" class="faq-modal__content">
                        { for FaqCategory::ALL.iter().map(|category| {
                            html! {
                                <section class="faq-category">
                                    <h3 id={category.heading_dom_id()} class="faq-category__title">
                                        { category.title() }
                                    </h3>
                                    { for entries(*category).iter().map(|entry| html! {
                                        <FaqItem
                                            id={entry.id}
                                            question={entry.question}
                                            category={category.title()}
                                        >
                                            { for entry.answer.iter().map(|paragraph| html! {
                                                <p>{ *paragraph }</p>
                                            }) }
                                        </FaqItem>
                                    }) }
                                </section>
                            }
                        }) }
                    </div>
                    <div class="faq-modal__footer">
                        <p>{"解決しない場合はお気軽にお問い合わせください。"}</p>
                        <button id="faqModalContactBtn" class="faq-modal__contact" onclick={contact_handoff}>
                            {"お問い合わせする"}
                        </button>
                    </div>
                </div>
            </div>
        }
        <style>
            {r#"
            .faq-modal__dialog {
                max-width: 720px;
                display: flex;
                flex-direction: column;
                padding: 0;
                overflow: hidden;
            }

            .faq-modal__header {
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1.25rem 2rem;
                border-bottom: 1px solid #e5e5e5;
                background: #fff;
            }

            .faq-modal__header .modal__title {
                margin: 0;
            }

            .faq-modal__header .modal__close {
                position: static;
            }

            .faq-modal__content {
                position: relative;
                overflow-y: auto;
                max-height: 60vh;
                padding: 1.5rem 2rem;
            }

            .faq-category {
                margin-bottom: 2rem;
            }

            .faq-category__title {
                font-size: 1.15rem;
                color: #8b2335;
                padding: 0.5rem 0.75rem;
                margin-bottom: 1rem;
                border-left: 4px solid #8b2335;
                border-radius: 4px;
            }

            .faq-item {
                border: 1px solid #e5e5e5;
                border-radius: 8px;
                margin-bottom: 0.75rem;
                background: #fff;
            }

            .faq-question {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1rem;
                padding: 1rem 1.25rem;
                cursor: pointer;
                list-style: none;
                font-weight: 600;
                color: #1a1a1a;
            }

            .faq-question::-webkit-details-marker {
                display: none;
            }

            .faq-question:hover {
                color: #8b2335;
            }

            .faq-question__icon {
                flex-shrink: 0;
                color: #8b2335;
                font-size: 1.25rem;
            }

            .faq-answer {
                padding: 0 1.25rem 1rem;
            }

            .faq-answer p {
                color: #555;
                line-height: 1.8;
                margin-bottom: 0.75rem;
            }

            .faq-modal__footer {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1rem;
                padding: 1.25rem 2rem;
                border-top: 1px solid #e5e5e5;
                background: #fafafa;
            }

            .faq-modal__footer p {
                color: #666;
                font-size: 0.9rem;
            }

            .faq-modal__contact {
                flex-shrink: 0;
                padding: 0.7rem 1.5rem;
                border: none;
                border-radius: 8px;
                background: #8b2335;
                color: #fff;
                font-weight: 600;
                cursor: pointer;
            }

            .faq-modal__contact:hover {
                background: #a33247;
            }

            @media (max-width: 768px) {
                .faq-modal__header,
                .faq-modal__content,
                .faq-modal__footer {
                    padding-left: 1rem;
                    padding-right: 1rem;
                }

                .faq-modal__footer {
                    flex-direction: column;
                    align-items: stretch;
                    text-align: center;
                }
            }
            "#}
        </style>
        </>
    }
}

/// Page section introducing the FAQ: category shortcuts plus a button that
/// opens the full modal.
#[function_component(FaqIntro)]
pub fn faq_intro() -> Html {
    let ui = use_ui();

    let open_all = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            ui.dispatch(UiAction::Open(ModalId::Faq));
        })
    };

    html! {
        <section id="faq" class="faq-intro" data-animate="">
            <h2 class="section-title">{"よくあるご質問"}</h2>
            <p class="faq-intro__lead">
                {"カテゴリを選ぶと、該当する質問へ直接移動できます。"}
            </p>
            <div class="faq-intro__categories">
                { for FaqCategory::ALL.iter().map(|category| {
                    let ui = ui.clone();
                    let category = *category;
                    html! {
                        <button
                            class="faq-intro__category-item"
                            onclick={Callback::from(move |_: MouseEvent| {
                                ui.dispatch(UiAction::NavigateFaq(category));
                            })}
                        >
                            { category.title() }
                        </button>
                    }
                }) }
            </div>
            <button id="openFaqModalBtn" class="faq-intro__open-all" onclick={open_all}>
                {"すべての質問を見る"}
            </button>
            <style>
                {r#"
                .faq-intro {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }

                .faq-intro__lead {
                    color: #666;
                    margin-bottom: 1.5rem;
                }

                .faq-intro__categories {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }

                .faq-intro__category-item {
                    padding: 0.6rem 1.25rem;
                    border: 1px solid #8b2335;
                    border-radius: 999px;
                    background: #fff;
                    color: #8b2335;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .faq-intro__category-item:hover {
                    background: #8b2335;
                    color: #fff;
                }

                .faq-intro__open-all {
                    padding: 0.8rem 2.5rem;
                    border: none;
                    border-radius: 8px;
                    background: #1a1a1a;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .faq-intro__open-all:hover {
                    background: #333;
                }
                "#}
            </style>
        </section>
    }
}

//! Application cards and their detail modals.

use yew::prelude::*;

use crate::components::modal::{use_application_escape, use_deferred_focus};
use crate::config;
use crate::state::{use_ui, ApplicationId, ModalId, UiAction, UiHandle};
use crate::utils::{analytics, dom};

/// What a close trigger does, depending on the element it is attached to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseBehavior {
    /// The trigger is a link that may navigate; the modal closes shortly
    /// after so the navigation is not interrupted.
    AllowNavigateThenClose,
    /// Default action is suppressed and the modal closes at once.
    CloseImmediately,
}

/// Links to absolute `http(s)` targets and in-page anchors keep their
/// navigation; everything else closes immediately.
pub fn close_behavior(is_link: bool, href: Option<&str>) -> CloseBehavior {
    if is_link {
        if let Some(href) = href {
            if href.starts_with("http://") || href.starts_with("https://") || href.starts_with('#')
            {
                return CloseBehavior::AllowNavigateThenClose;
            }
        }
    }
    CloseBehavior::CloseImmediately
}

struct ApplicationInfo {
    image: &'static str,
    summary: &'static str,
    details: &'static [&'static str],
    case_url: &'static str,
}

fn info(app: ApplicationId) -> ApplicationInfo {
    match app {
        ApplicationId::Welding => ApplicationInfo {
            image: "/assets/applications/welding.jpg",
            summary: "発生源のすぐ上にフードを構え、ヒュームを逃さず捕集。",
            details: &[
                "トーチの移動に合わせて片手でフードを引き寄せられるため、作業のたびにダクトを組み直す必要がありません。",
                "アームは任意の位置で自立保持します。スパッタガード付きフードとの組み合わせで、溶接ワイヤ交換時もそのままの位置を維持できます。",
            ],
            case_url: "https://www.youtube.com/watch?v=weld-arm-case",
        },
        ApplicationId::Grinding => ApplicationInfo {
            image: "/assets/applications/grinding.jpg",
            summary: "研削・研磨で舞う粉じんを、手元の吸込口で受け止める。",
            details: &[
                "ワークに合わせて吸込口を近づけても、バネバランス機構で位置がずれません。φ65ダクトで大風量にも対応します。",
                "ベンチグラインダ横への卓上設置など、省スペースのレイアウトが可能です。",
            ],
            case_url: "https://www.youtube.com/watch?v=grind-arm-case",
        },
        ApplicationId::Laboratory => ApplicationInfo {
            image: "/assets/applications/laboratory.jpg",
            summary: "試薬の取り扱い場所に合わせて動かせる局所排気。",
            details: &[
                "ドラフトチャンバーに入らない装置の近傍排気に。透明フードで手元の視認性を保ちます。",
                "天吊りベースで床を塞がず、未使用時は天井側に畳んでおけます。",
            ],
            case_url: "https://www.youtube.com/watch?v=lab-arm-case",
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppModalProps {
    app: ApplicationId,
}

/// Builds the click handler for one close trigger. The behavior decision is
/// shared so every trigger kind stays consistent.
fn close_trigger(
    ui: &UiHandle,
    app: ApplicationId,
    pending: std::rc::Rc<std::cell::RefCell<dom::PendingAction>>,
    is_link: bool,
    href: Option<&'static str>,
) -> Callback<MouseEvent> {
    let dispatcher = ui.dispatcher();
    Callback::from(move |e: MouseEvent| match close_behavior(is_link, href) {
        CloseBehavior::AllowNavigateThenClose => {
            let dispatcher = dispatcher.clone();
            pending
                .borrow_mut()
                .schedule(config::LINK_CLOSE_DELAY_MS, move || {
                    dispatcher.dispatch(UiAction::Close(ModalId::Application(app)));
                });
        }
        CloseBehavior::CloseImmediately => {
            e.prevent_default();
            dispatcher.dispatch(UiAction::Close(ModalId::Application(app)));
        }
    })
}

#[function_component(AppModal)]
fn app_modal(props: &AppModalProps) -> Html {
    let ui = use_ui();
    let app = props.app;
    let open = ui.overlays.is_open(ModalId::Application(app));
    let pending_close = use_mut_ref(dom::PendingAction::default);

    // Accessibility: focus lands on the close control once settled.
    use_deferred_focus(open, app.close_button_dom_id());

    let details = info(app);

    let close_now = close_trigger(&ui, app, pending_close.clone(), false, None);

    // External case-study link: navigation proceeds, the modal follows.
    let close_after_external = {
        let inner = close_trigger(&ui, app, pending_close.clone(), true, Some(details.case_url));
        let case_url = details.case_url;
        Callback::from(move |e: MouseEvent| {
            analytics::track_external_link(app.title(), case_url);
            inner.emit(e);
        })
    };

    // In-page anchor: the hash navigation proceeds behind the overlay.
    let close_after_anchor = close_trigger(&ui, app, pending_close, true, Some("#gallery"));

    html! {
        if open {
            <div
                id={app.modal_dom_id()}
                class="modal app-modal is-open"
                role="dialog"
                aria-modal="true"
                aria-hidden="false"
            >
                <div class="modal__overlay" data-close-modal="" onclick={close_now.clone()}></div>
                <div class="modal__dialog app-modal__dialog">
                    <button
                        id={app.close_button_dom_id()}
                        class="modal__close app-modal__close"
                        data-close-modal=""
                        aria-label="閉じる"
                        onclick={close_now}
                    >
                        {"×"}
                    </button>
                    <img class="app-modal__image" src={details.image} alt={app.title()} />
                    <h3 class="app-modal__title">{ app.title() }</h3>
                    { for details.details.iter().map(|paragraph| html! {
                        <p class="app-modal__text">{ *paragraph }</p>
                    }) }
                    <div class="app-modal__links">
                        <a
                            href={details.case_url}
                            target="_blank"
                            rel="noopener"
                            data-close-modal=""
                            class="app-modal__link"
                            onclick={close_after_external}
                        >
                            {"導入事例を見る"}
                        </a>
                        <a
                            href="#gallery"
                            data-close-modal=""
                            class="app-modal__link app-modal__link--secondary"
                            onclick={close_after_anchor}
                        >
                            {"パーツギャラリーへ"}
                        </a>
                    </div>
                </div>
            </div>
        }
    }
}

#[function_component(Applications)]
pub fn applications() -> Html {
    let ui: UiHandle = use_ui();

    // Application modals close all at once on Escape, independently of the
    // contact/FAQ handler.
    use_application_escape(ui.clone());

    html! {
        <section id="applications" class="applications" data-animate="">
            <h2 class="section-title">{"活用シーン"}</h2>
            <div class="applications__grid">
                { for ApplicationId::ALL.iter().map(|app| {
                    let ui = ui.clone();
                    let app = *app;
                    let details = info(app);
                    html! {
                        <button
                            class="application-card"
                            onclick={Callback::from(move |_: MouseEvent| {
                                analytics::track_application_open(app);
                                ui.dispatch(UiAction::Open(ModalId::Application(app)));
                            })}
                        >
                            <img
                                class="application-card__image"
                                src={details.image}
                                loading="lazy"
                                alt={app.title()}
                            />
                            <span class="application-card__title">{ app.title() }</span>
                            <span class="application-card__summary">{ details.summary }</span>
                        </button>
                    }
                }) }
            </div>
            { for ApplicationId::ALL.iter().map(|app| html! { <AppModal app={*app} /> }) }
            <style>
                {r#"
                .applications {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .applications__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .application-card {
                    display: flex;
                    flex-direction: column;
                    text-align: left;
                    border: 1px solid #e5e5e5;
                    border-radius: 12px;
                    background: #fff;
                    padding: 0 0 1.25rem;
                    overflow: hidden;
                    cursor: pointer;
                    transition: box-shadow 0.25s ease, transform 0.25s ease;
                }

                .application-card:hover {
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
                    transform: translateY(-3px);
                }

                .application-card__image {
                    width: 100%;
                    aspect-ratio: 3 / 2;
                    object-fit: cover;
                    margin-bottom: 1rem;
                }

                .application-card__title {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #1a1a1a;
                    padding: 0 1.25rem;
                    margin-bottom: 0.5rem;
                }

                .application-card__summary {
                    color: #666;
                    font-size: 0.9rem;
                    line-height: 1.7;
                    padding: 0 1.25rem;
                }

                .app-modal__dialog {
                    max-width: 640px;
                    padding: 0 0 2rem;
                }

                .app-modal__image {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                    border-radius: 12px 12px 0 0;
                }

                .app-modal__close {
                    background: rgba(0, 0, 0, 0.45);
                    color: #fff;
                    border-radius: 50%;
                }

                .app-modal__title {
                    font-size: 1.35rem;
                    color: #1a1a1a;
                    margin: 1.5rem 2rem 0.75rem;
                }

                .app-modal__text {
                    color: #555;
                    line-height: 1.8;
                    margin: 0 2rem 0.75rem;
                }

                .app-modal__links {
                    display: flex;
                    gap: 1rem;
                    margin: 1.25rem 2rem 0;
                }

                .app-modal__link {
                    padding: 0.7rem 1.5rem;
                    border-radius: 8px;
                    background: #8b2335;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                }

                .app-modal__link:hover {
                    background: #a33247;
                }

                .app-modal__link--secondary {
                    background: #fff;
                    color: #8b2335;
                    border: 1px solid #8b2335;
                }

                .app-modal__link--secondary:hover {
                    background: #f7edef;
                }

                @media (max-width: 768px) {
                    .app-modal__links {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_that_navigate_close_after_a_delay() {
        assert_eq!(
            close_behavior(true, Some("https://example.com/case")),
            CloseBehavior::AllowNavigateThenClose
        );
        assert_eq!(
            close_behavior(true, Some("http://example.com")),
            CloseBehavior::AllowNavigateThenClose
        );
        assert_eq!(
            close_behavior(true, Some("#gallery")),
            CloseBehavior::AllowNavigateThenClose
        );
    }

    #[test]
    fn other_triggers_close_immediately() {
        assert_eq!(
            close_behavior(true, Some("mailto:info@example.com")),
            CloseBehavior::CloseImmediately
        );
        assert_eq!(
            close_behavior(true, None),
            CloseBehavior::CloseImmediately
        );
        assert_eq!(close_behavior(false, None), CloseBehavior::CloseImmediately);
    }
}

//! Fixed header: hide-on-scroll-down, mobile nav toggle and smooth-scroll
//! anchor links.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::{use_ui, ModalId, UiAction};
use crate::utils::scroll;

#[function_component(Header)]
pub fn header() -> Html {
    let ui = use_ui();
    let hidden = use_state(|| false);
    let nav_open = use_state(|| false);
    // Previous scroll sample, owned here instead of a module global.
    let last_scroll = use_mut_ref(|| 0.0_f64);

    {
        let hidden = hidden.clone();
        let last_scroll = last_scroll.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let hidden = hidden.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(current) = win.scroll_y() {
                                    let last = *last_scroll.borrow();
                                    hidden.set(scroll::header_hidden_after_scroll(current, last));
                                    *last_scroll.borrow_mut() = current;
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| {
            nav_open.set(!*nav_open);
        })
    };

    let open_contact = {
        let ui = ui.clone();
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| {
            nav_open.set(false);
            ui.dispatch(UiAction::Open(ModalId::Contact));
        })
    };

    let nav_link = |target: &'static str, label: &'static str| -> Html {
        let nav_open = nav_open.clone();
        html! {
            <a
                href={format!("#{}", target)}
                class="header__nav-link"
                onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll::scroll_to_anchor(target);
                    // Close the mobile menu if open.
                    if *nav_open {
                        nav_open.set(false);
                    }
                })}
            >
                { label }
            </a>
        }
    };

    html! {
        <header id="header" class={classes!("header", (*hidden).then_some("header--hidden"))}>
            <div class="header__inner">
                <a class="header__logo" href="#">{"SUPPORT ARM"}</a>
                <button
                    id="navToggle"
                    class={classes!("header__toggle", (*nav_open).then_some("is-active"))}
                    aria-label="メニュー"
                    onclick={toggle_nav}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav id="nav" class={classes!("header__nav", (*nav_open).then_some("is-open"))}>
                    { nav_link("product", "製品情報") }
                    { nav_link("applications", "活用シーン") }
                    { nav_link("gallery", "パーツギャラリー") }
                    { nav_link("faq", "よくあるご質問") }
                    <button id="openFormBtn" class="header__contact" onclick={open_contact}>
                        {"お問い合わせ"}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 900;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 1px 0 rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease;
                }

                .header--hidden {
                    transform: translateY(-100%);
                }

                .header__inner {
                    max-width: 1080px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.9rem 2rem;
                }

                .header__logo {
                    font-weight: 800;
                    letter-spacing: 0.08em;
                    color: #1a1a1a;
                    text-decoration: none;
                    font-size: 1.1rem;
                }

                .header__nav {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .header__nav-link {
                    color: #333;
                    text-decoration: none;
                    font-size: 0.95rem;
                }

                .header__nav-link:hover {
                    color: #8b2335;
                }

                .header__contact {
                    padding: 0.55rem 1.4rem;
                    border: none;
                    border-radius: 999px;
                    background: #8b2335;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }

                .header__contact:hover {
                    background: #a33247;
                }

                .header__toggle {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 5px;
                    width: 44px;
                    height: 44px;
                    border: none;
                    background: none;
                    cursor: pointer;
                }

                .header__toggle span {
                    display: block;
                    height: 2px;
                    background: #1a1a1a;
                    transition: transform 0.25s ease, opacity 0.25s ease;
                }

                .header__toggle.is-active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .header__toggle.is-active span:nth-child(2) {
                    opacity: 0;
                }

                .header__toggle.is-active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 768px) {
                    .header__toggle {
                        display: flex;
                    }

                    .header__nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 0;
                        background: #fff;
                        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.12);
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }

                    .header__nav.is-open {
                        max-height: 320px;
                    }

                    .header__nav-link {
                        padding: 1rem 2rem;
                        border-bottom: 1px solid #eee;
                    }

                    .header__contact {
                        margin: 1rem 2rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

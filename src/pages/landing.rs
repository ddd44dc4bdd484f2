//! Page composition: sections, modals and the document-level wiring that
//! does not belong to a single section.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::applications::Applications;
use crate::components::contact::ContactModal;
use crate::components::faq_modal::{FaqIntro, FaqModal};
use crate::components::gallery::Gallery;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::modal::{use_focus_trap, use_primary_escape};
use crate::components::reveal::use_reveal_animations;
use crate::components::viewer::{ProductViewer, Viewer360};
use crate::config;
use crate::state::use_ui;
use crate::utils::{analytics, dom, scroll};

/// Tracks scroll depth against the document height for the page lifetime.
#[hook]
fn use_scroll_depth() {
    use_effect_with_deps(
        |_| {
            let tracker = Rc::new(RefCell::new(scroll::ScrollDepthTracker::default()));
            let callback = Closure::<dyn FnMut()>::new(move || {
                let Some(window) = web_sys::window() else { return };
                let Some(root) = window.document().and_then(|d| d.document_element()) else {
                    return;
                };
                let scroll_top = window.scroll_y().unwrap_or(0.0);
                let scroll_height = root.scroll_height() as f64;
                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                if let Some(percent) = scroll::scroll_percent(scroll_top, scroll_height, viewport)
                {
                    for step in tracker.borrow_mut().crossed(percent) {
                        analytics::track_scroll_depth(step);
                    }
                }
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                let _ = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                drop(callback);
            }
        },
        (),
    );
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let ui = use_ui();

    // Document-level behaviors.
    use_reveal_animations();
    use_scroll_depth();
    use_primary_escape(ui.clone());
    use_focus_trap(ui);

    // Lazy image promotion runs once after the first render.
    use_effect_with_deps(
        |_| {
            dom::init_lazy_images();
            || ()
        },
        (),
    );

    // Polite load announcement for screen readers, removed shortly after.
    let announcing = use_state(|| true);
    {
        let announcing = announcing.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOAD_ANNOUNCE_MS, move || {
                    announcing.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let track_video = Callback::from(|_: Event| {
        analytics::track_video_load();
    });

    let footer_form_click = Callback::from(|_: MouseEvent| {
        analytics::track_contact_click("お問い合わせフォーム", config::CONTACT_FORM_URL);
    });

    let footer_channel_click = Callback::from(|_: MouseEvent| {
        analytics::track_external_link(
            "製品紹介チャンネル",
            "https://www.youtube.com/@support-arm",
        );
    });

    html! {
        <div class="landing-page">
            <Header />
            <Hero />
            <main>
                <ProductViewer />
                <Viewer360 />
                <Applications />
                <Gallery />
                <section id="videos" class="videos" data-animate="">
                    <h2 class="section-title">{"導入イメージ動画"}</h2>
                    <div class="video-card">
                        <iframe
                            src="https://www.youtube.com/embed/support-arm-demo"
                            title="サポートアーム 導入イメージ"
                            allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen={true}
                            onload={track_video}
                        />
                    </div>
                </section>
                <FaqIntro />
            </main>
            <footer class="footer">
                <div class="footer__inner">
                    <p class="footer__brand">{"SUPPORT ARM"}</p>
                    <nav class="footer__links">
                        <a
                            href={config::CONTACT_FORM_URL}
                            target="_blank"
                            rel="noopener"
                            onclick={footer_form_click}
                        >
                            {"お問い合わせフォーム"}
                        </a>
                        <a
                            href="https://www.youtube.com/@support-arm"
                            target="_blank"
                            rel="noopener"
                            onclick={footer_channel_click}
                        >
                            {"製品紹介チャンネル"}
                        </a>
                    </nav>
                    <p class="footer__copyright">{"© 2025 Support Arm Mfg. Co., Ltd."}</p>
                </div>
            </footer>
            <ContactModal />
            <FaqModal />
            if *announcing {
                <div role="status" aria-live="polite" class="sr-only">
                    {"ページの読み込みが完了しました"}
                </div>
            }
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    font-family: "Hiragino Kaku Gothic ProN", "Noto Sans JP", "Yu Gothic",
                        sans-serif;
                    color: #1a1a1a;
                    background: #fff;
                    line-height: 1.7;
                }

                main {
                    padding-top: 0;
                }

                main section {
                    scroll-margin-top: 90px;
                }

                .section-title {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 1.5rem;
                    letter-spacing: 0.05em;
                }

                .section-title::after {
                    content: "";
                    display: block;
                    width: 48px;
                    height: 3px;
                    background: #8b2335;
                    margin: 0.75rem auto 0;
                    border-radius: 2px;
                }

                [data-animate] {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                [data-animate].is-visible {
                    opacity: 1;
                    transform: none;
                }

                .videos {
                    max-width: 880px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .video-card iframe {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border: none;
                    border-radius: 12px;
                }

                .footer {
                    background: #1a1a1a;
                    color: #ddd;
                    margin-top: 4rem;
                }

                .footer__inner {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    align-items: center;
                    text-align: center;
                }

                .footer__brand {
                    font-weight: 800;
                    letter-spacing: 0.08em;
                }

                .footer__links {
                    display: flex;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }

                .footer__links a {
                    color: #bbb;
                    text-decoration: none;
                }

                .footer__links a:hover {
                    color: #fff;
                }

                .footer__copyright {
                    font-size: 0.85rem;
                    color: #888;
                }

                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    padding: 0;
                    margin: -1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                    border: 0;
                }
                "#}
            </style>
        </div>
    }
}

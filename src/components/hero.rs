//! Hero section with a background video that yields resources when the tab
//! is hidden.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::state::{use_ui, ModalId, UiAction};
use crate::utils::{dom, scroll};

fn hero_video() -> Option<HtmlVideoElement> {
    dom::element_by_id("heroVideo").and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let ui = use_ui();

    use_effect_with_deps(
        |_| {
            // Pause the background video while the tab is hidden.
            let callback = Closure::<dyn FnMut()>::new(|| {
                let Some(document) = dom::document() else { return };
                let Some(video) = hero_video() else { return };
                if document.hidden() {
                    let _ = video.pause();
                } else {
                    let _ = video.play();
                }
            });
            let document = dom::document();
            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback(
                    "visibilitychange",
                    callback.as_ref().unchecked_ref(),
                );
            }

            // Small screens get a slightly slower playback to save data.
            if let Some(window) = web_sys::window() {
                if let Ok(Some(query)) = window.match_media("(max-width: 768px)") {
                    if query.matches() {
                        if let Some(video) = hero_video() {
                            video.set_playback_rate(0.8);
                        }
                    }
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                drop(callback);
            }
        },
        (),
    );

    let open_contact = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            ui.dispatch(UiAction::Open(ModalId::Contact));
        })
    };

    let to_product = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_anchor("product");
    });

    html! {
        <section class="hero">
            <video
                id="heroVideo"
                class="hero__video"
                src="/assets/hero.mp4"
                autoplay={true}
                muted={true}
                loop={true}
                playsinline={true}
            />
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">{"狙った位置で、止まる。"}</h1>
                <p class="hero__lead">
                    {"切削ミスト・溶接ヒューム・粉じんを発生源で捕集する、自立保持式サポートアーム。"}
                </p>
                <div class="hero__actions">
                    <button class="hero__cta" onclick={open_contact}>{"お問い合わせ"}</button>
                    <a href="#product" class="hero__cta hero__cta--ghost" onclick={to_product}>
                        {"製品を見る"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 92vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                }

                .hero__video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero__overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        180deg,
                        rgba(10, 14, 20, 0.55) 0%,
                        rgba(10, 14, 20, 0.35) 60%,
                        rgba(10, 14, 20, 0.7) 100%
                    );
                }

                .hero__content {
                    position: relative;
                    color: #fff;
                    padding: 2rem;
                    max-width: 720px;
                }

                .hero__title {
                    font-size: clamp(2.2rem, 5vw, 3.6rem);
                    letter-spacing: 0.05em;
                    margin-bottom: 1.25rem;
                }

                .hero__lead {
                    font-size: 1.1rem;
                    line-height: 2;
                    color: #e8e8e8;
                    margin-bottom: 2rem;
                }

                .hero__actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero__cta {
                    display: inline-block;
                    padding: 0.9rem 2.4rem;
                    border: none;
                    border-radius: 999px;
                    background: #8b2335;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero__cta:hover {
                    background: #a33247;
                }

                .hero__cta--ghost {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                }

                .hero__cta--ghost:hover {
                    background: rgba(255, 255, 255, 0.12);
                }
                "#}
            </style>
        </section>
    }
}

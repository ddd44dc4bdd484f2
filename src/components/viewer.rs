//! 3D product viewer and the 360° turntable, both driven by typed model
//! variants instead of raw source attributes.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::{analytics, dom};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModelVariant {
    WithDuct,
    Bare,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 2] = [ModelVariant::WithDuct, ModelVariant::Bare];

    pub fn src(self) -> &'static str {
        match self {
            ModelVariant::WithDuct => "/assets/models/support-arm-duct.glb",
            ModelVariant::Bare => "/assets/models/support-arm.glb",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelVariant::WithDuct => "ダクトあり",
            ModelVariant::Bare => "ダクトなし",
        }
    }
}

#[function_component(ProductViewer)]
pub fn product_viewer() -> Html {
    let active = use_state(|| ModelVariant::WithDuct);

    // The viewer reports once when the model finishes loading.
    use_effect_with_deps(
        |_| {
            let callback = Closure::<dyn FnMut()>::new(|| {
                analytics::track_model_load();
            });
            let viewer = dom::element_by_id("product-viewer");
            if let Some(viewer) = &viewer {
                let _ = viewer
                    .add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
            }
            move || {
                if let Some(viewer) = viewer {
                    let _ = viewer.remove_event_listener_with_callback(
                        "load",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                drop(callback);
            }
        },
        (),
    );

    html! {
        <section id="product" class="product" data-animate="">
            <h2 class="section-title">{"製品情報"}</h2>
            <p class="product__lead">
                {"ドラッグで回転、ホイールで拡大できます。ダクトの有無を切り替えて形状をご確認ください。"}
            </p>
            <model-viewer
                id="product-viewer"
                class="product__viewer"
                src={active.src()}
                alt="サポートアーム 3Dモデル"
                camera-controls="true"
                auto-rotate="true"
                shadow-intensity="1"
            />
            <div class="product__toggles">
                { for ModelVariant::ALL.iter().map(|variant| {
                    let variant = *variant;
                    let active_handle = active.clone();
                    let is_active = *active == variant;
                    html! {
                        <button
                            class={classes!("model-toggle-btn", is_active.then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| {
                                analytics::track_model_toggle(variant.label());
                                active_handle.set(variant);
                            })}
                        >
                            { variant.label() }
                        </button>
                    }
                }) }
            </div>
            <style>
                {r#"
                .product {
                    max-width: 880px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }

                .product__lead {
                    color: #666;
                    margin-bottom: 1.5rem;
                }

                .product__viewer {
                    width: 100%;
                    height: 460px;
                    background: #f4f4f4;
                    border-radius: 12px;
                }

                .product__toggles {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }

                .model-toggle-btn {
                    padding: 0.6rem 1.5rem;
                    border: 1px solid #ccc;
                    border-radius: 999px;
                    background: #fff;
                    color: #555;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .model-toggle-btn.active {
                    background: #8b2335;
                    border-color: #8b2335;
                    color: #fff;
                }
                "#}
            </style>
        </section>
    }
}

/// Simplified two-button variant swap used further down the page.
#[function_component(Viewer360)]
pub fn viewer_360() -> Html {
    let active = use_state(|| ModelVariant::Bare);

    let swap_button = |variant: ModelVariant, dom_id: &'static str, label: &'static str| -> Html {
        let active_handle = active.clone();
        let is_active = *active == variant;
        html! {
            <button
                id={dom_id}
                class={classes!("viewer360__btn", is_active.then_some("is-active"))}
                aria-pressed={if is_active { "true" } else { "false" }}
                onclick={Callback::from(move |_: MouseEvent| {
                    active_handle.set(variant);
                })}
            >
                { label }
            </button>
        }
    };

    html! {
        <section class="viewer360" data-animate="">
            <h2 class="section-title">{"360°ビュー"}</h2>
            <model-viewer
                id="viewer360Model"
                class="viewer360__model"
                src={active.src()}
                alt="サポートアーム 360°ビュー"
                camera-controls="true"
                auto-rotate="true"
            />
            <div class="viewer360__controls">
                { swap_button(ModelVariant::Bare, "viewer360BtnArm", "アームのみ") }
                { swap_button(ModelVariant::WithDuct, "viewer360BtnDuct", "ダクト装着") }
            </div>
            <style>
                {r#"
                .viewer360 {
                    max-width: 880px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }

                .viewer360__model {
                    width: 100%;
                    height: 380px;
                    background: #1a1a1a;
                    border-radius: 12px;
                }

                .viewer360__controls {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }

                .viewer360__btn {
                    padding: 0.6rem 1.5rem;
                    border: 1px solid #444;
                    border-radius: 999px;
                    background: transparent;
                    color: #444;
                    cursor: pointer;
                }

                .viewer360__btn.is-active {
                    background: #1a1a1a;
                    border-color: #1a1a1a;
                    color: #fff;
                }
                "#}
            </style>
        </section>
    }
}

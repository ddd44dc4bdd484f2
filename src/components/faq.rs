//! FAQ disclosure items with hash deep-linking and keyboard toggling.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::state::FaqCategory;
use crate::utils::{analytics, dom, scroll};

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

/// Static FAQ content per category.
pub fn entries(category: FaqCategory) -> &'static [FaqEntry] {
    match category {
        FaqCategory::Product => &[
            FaqEntry {
                id: "faq-holding-force",
                question: "アームはどのくらいの重さまで保持できますか?",
                answer: &[
                    "標準モデルで先端荷重2kgまで、強化モデルで5kgまで自立保持できます。フード・ダクトを含めた総重量でご検討ください。",
                    "可動範囲内であれば任意の位置・角度で止まり、締め直しは不要です。",
                ],
            },
            FaqEntry {
                id: "faq-duct-diameter",
                question: "対応しているダクト径を教えてください。",
                answer: &[
                    "φ50・φ65・φ75の3種類をご用意しています。異径への変換アダプタもオプションで対応可能です。",
                ],
            },
            FaqEntry {
                id: "faq-reach",
                question: "アームのリーチ(可動範囲)はどのくらいですか?",
                answer: &[
                    "標準1,000mm・ロング1,500mmの2タイプです。壁面・天吊り・卓上いずれの取付でも同じ可動範囲を確保できます。",
                ],
            },
        ],
        FaqCategory::Installation => &[
            FaqEntry {
                id: "faq-mounting",
                question: "どのような場所に取り付けられますか?",
                answer: &[
                    "壁面・天井・作業台の3通りの取付ベースを用意しています。M8ボルト4本で固定でき、位置を変えたい場合もベースごと移設できます。",
                ],
            },
            FaqEntry {
                id: "faq-tools",
                question: "取付に特別な工具は必要ですか?",
                answer: &[
                    "六角レンチのみで組み立てられます。工場出荷時にアーム本体は調整済みのため、設置後すぐにお使いいただけます。",
                ],
            },
        ],
        FaqCategory::Maintenance => &[
            FaqEntry {
                id: "faq-adjustment",
                question: "使っているうちにアームが下がってくるようになりました。",
                answer: &[
                    "関節部の摩擦調整ネジを1/4回転ずつ締めて保持力を回復できます。調整方法は取扱説明書の「保持力調整」の項をご覧ください。",
                ],
            },
            FaqEntry {
                id: "faq-parts",
                question: "交換部品は購入できますか?",
                answer: &[
                    "関節ユニット・バネ・取付ベースなどの保守部品を単品で販売しています。パーツギャラリーから形状をご確認のうえ、型番を添えてお問い合わせください。",
                ],
            },
        ],
        FaqCategory::Purchase => &[
            FaqEntry {
                id: "faq-lead-time",
                question: "納期はどのくらいかかりますか?",
                answer: &[
                    "標準モデルは受注から約2週間、特注仕様は約4〜6週間です。数量によって前後しますので、お急ぎの場合はご相談ください。",
                ],
            },
            FaqEntry {
                id: "faq-quotation",
                question: "見積りを依頼したいのですが。",
                answer: &[
                    "お問い合わせフォームから型番・数量・納入先をお知らせください。1営業日以内にお見積りをお送りします。",
                ],
            },
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub id: String,
    /// Category title reported with the question's analytics event.
    pub category: &'static str,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);
    let pending_scroll = use_mut_ref(dom::PendingAction::default);

    // Deep link: an item addressed by the URL hash opens itself and scrolls
    // into view once the content has expanded.
    {
        let is_open = is_open.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(hash) = window.location().hash() {
                            if hash == format!("#{}", id) {
                                is_open.set(true);
                                let id = id.clone();
                                let timeout = Timeout::new(100, move || {
                                    if let Some(element) = dom::element_by_id(&id) {
                                        element.scroll_into_view_with_bool(true);
                                    }
                                });
                                timeout.forget();
                            }
                        }
                    }
                };

                check_hash();

                let callback = Closure::<dyn FnMut()>::new(check_hash);
                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "hashchange",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        let pending_scroll = pending_scroll.clone();
        let id = props.id.clone();
        let question = props.question.clone();
        let category = props.category;
        move || {
            let opening = !*is_open;
            is_open.set(opening);
            analytics::track_faq_click(&question, category);

            if opening {
                // Align the opened item just below the fixed header, but
                // only when it is not already sufficiently in view.
                let id = id.clone();
                pending_scroll.borrow_mut().schedule(
                    config::ACCORDION_SCROLL_DELAY_MS,
                    move || {
                        let Some(window) = web_sys::window() else { return };
                        let Some(item) = dom::element_by_id(&id) else { return };
                        let page_y = window.scroll_y().unwrap_or(0.0);
                        let header_height = scroll::header_height().unwrap_or(80.0);
                        let item_top = item.get_bounding_client_rect().top() + page_y;
                        let scroll_to = item_top - header_height - config::SCROLL_GAP_PX;
                        if page_y > scroll_to {
                            scroll::scroll_window_to(scroll_to);
                        }
                    },
                );
            } else {
                pending_scroll.borrow_mut().cancel();
            }
        }
    };

    let onclick = {
        let toggle = toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle();
        })
    };

    // Enter/Space mirror the native disclosure toggle for keyboard users.
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            toggle();
        }
    });

    html! {
        <details id={props.id.clone()} class="faq-item" open={*is_open}>
            <summary class="faq-question" {onclick} {onkeydown}>
                <span class="faq-question__text">{&props.question}</span>
                <span class="faq-question__icon">{ if *is_open { "−" } else { "+" } }</span>
            </summary>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </details>
    }
}

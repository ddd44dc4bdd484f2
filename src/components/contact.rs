//! Contact modal: validated form that hands off to the hosted form service.

use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::use_deferred_focus;
use crate::config;
use crate::state::{use_ui, ModalId, UiAction};

/// Shape check matching the page's historical pattern: exactly one `@`, no
/// whitespace, and a dot strictly inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Returns the alert message blocking submission, if any.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err("必須項目を入力してください。");
    }
    if !is_valid_email(email) {
        return Err("有効なメールアドレスを入力してください。");
    }
    Ok(())
}

#[function_component(ContactModal)]
pub fn contact_modal() -> Html {
    let ui = use_ui();
    let open = ui.overlays.is_open(ModalId::Contact);

    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);

    // Focus lands on the first field once the open animation settles.
    use_deferred_focus(open, "contactName");

    let close = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| {
            ui.dispatch(UiAction::Close(ModalId::Contact));
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let ui = ui.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };

            if let Err(alert) = validate_contact(&name, &email, &message) {
                let _ = window.alert_with_message(alert);
                return;
            }

            submitting.set(true);

            // Hand off: close the modal, open the hosted form in a new tab,
            // reset the fields. No response is awaited.
            ui.dispatch(UiAction::Close(ModalId::Contact));
            match window.open_with_url_and_target(config::CONTACT_FORM_URL, "_blank") {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(_) => {
                    let _ =
                        window.alert_with_message("送信に失敗しました。\nもう一度お試しください。");
                }
            }

            // The submit control always comes back enabled with its
            // original label.
            submitting.set(false);
        })
    };

    html! {
        <>
        if open {
            <div id="contactModal" class="modal is-open" role="dialog" aria-modal="true" aria-labelledby="contactModalTitle">
                <div class="modal__overlay" onclick={close.clone()}></div>
                <div class="modal__dialog">
                    <button id="closeModalBtn" class="modal__close" aria-label="閉じる" onclick={close}>{"×"}</button>
                    <h2 id="contactModalTitle" class="modal__title">{"お問い合わせ"}</h2>
                    <p class="modal__lead">
                        {"製品仕様・お見積り・デモ機のご相談など、お気軽にお問い合わせください。"}
                    </p>
                    <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
                        <label for="contactName">
                            {"お名前"}<span class="contact-form__required">{"必須"}</span>
                        </label>
                        <input
                            id="contactName"
                            type="text"
                            name="name"
                            value={(*name).clone()}
                            onchange={let name = name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                name.set(input.value());
                            }}
                        />
                        <label for="contactEmail">
                            {"メールアドレス"}<span class="contact-form__required">{"必須"}</span>
                        </label>
                        <input
                            id="contactEmail"
                            type="email"
                            name="email"
                            value={(*email).clone()}
                            onchange={let email = email.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            }}
                        />
                        <label for="contactMessage">
                            {"お問い合わせ内容"}<span class="contact-form__required">{"必須"}</span>
                        </label>
                        <textarea
                            id="contactMessage"
                            name="message"
                            rows="6"
                            value={(*message).clone()}
                            onchange={let message = message.clone(); move |e: Event| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                message.set(input.value());
                            }}
                        />
                        <button type="submit" class="contact-form__submit" disabled={*submitting}>
                            { if *submitting { "送信中..." } else { "送信する" } }
                        </button>
                    </form>
                </div>
            </div>
        }
        <style>
            {r#"
            .modal {
                position: fixed;
                inset: 0;
                z-index: 1000;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1rem;
            }

            .modal__overlay {
                position: absolute;
                inset: 0;
                background: rgba(10, 14, 20, 0.65);
                backdrop-filter: blur(2px);
            }

            .modal__dialog {
                position: relative;
                width: 100%;
                max-width: 520px;
                max-height: 90vh;
                overflow-y: auto;
                background: #ffffff;
                border-radius: 12px;
                padding: 2.5rem 2rem 2rem;
                box-shadow: 0 24px 64px rgba(0, 0, 0, 0.35);
                animation: modal-rise 0.25s ease;
            }

            @keyframes modal-rise {
                from { transform: translateY(16px); opacity: 0; }
                to { transform: translateY(0); opacity: 1; }
            }

            .modal__close {
                position: absolute;
                top: 0.75rem;
                right: 0.75rem;
                width: 40px;
                height: 40px;
                border: none;
                background: none;
                font-size: 1.6rem;
                line-height: 1;
                color: #555;
                cursor: pointer;
            }

            .modal__close:hover {
                color: #8b2335;
            }

            .modal__title {
                font-size: 1.5rem;
                margin-bottom: 0.75rem;
                color: #1a1a1a;
            }

            .modal__lead {
                color: #666;
                font-size: 0.95rem;
                margin-bottom: 1.5rem;
                line-height: 1.7;
            }

            .contact-form label {
                display: block;
                font-weight: 600;
                margin-bottom: 0.4rem;
                color: #333;
            }

            .contact-form__required {
                display: inline-block;
                margin-left: 0.5rem;
                padding: 0.1rem 0.5rem;
                font-size: 0.75rem;
                font-weight: 600;
                color: #fff;
                background: #8b2335;
                border-radius: 4px;
            }

            .contact-form input,
            .contact-form textarea {
                width: 100%;
                padding: 0.75rem;
                margin-bottom: 1.25rem;
                border: 1px solid #ccc;
                border-radius: 8px;
                font-size: 1rem;
                font-family: inherit;
            }

            .contact-form input:focus,
            .contact-form textarea:focus {
                outline: none;
                border-color: #8b2335;
                box-shadow: 0 0 0 3px rgba(139, 35, 53, 0.15);
            }

            .contact-form__submit {
                width: 100%;
                padding: 0.9rem;
                border: none;
                border-radius: 8px;
                background: #8b2335;
                color: #fff;
                font-size: 1.05rem;
                font-weight: 600;
                cursor: pointer;
                transition: background 0.2s ease;
            }

            .contact-form__submit:hover:enabled {
                background: #a33247;
            }

            .contact-form__submit:disabled {
                background: #b08890;
                cursor: wait;
            }
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("x@y.com"));
        assert!(is_valid_email("user@mail.co.jp"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("xy.com"));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email("@y.com"));
        assert!(!is_valid_email("x@.com"));
        assert!(!is_valid_email("x@com."));
        assert!(!is_valid_email("a b@y.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn empty_required_fields_block_submission() {
        assert_eq!(
            validate_contact("", "x@y.com", "hi"),
            Err("必須項目を入力してください。")
        );
        assert_eq!(
            validate_contact("田中", "", "hi"),
            Err("必須項目を入力してください。")
        );
        assert_eq!(
            validate_contact("田中", "x@y.com", ""),
            Err("必須項目を入力してください。")
        );
    }

    #[test]
    fn bad_email_blocks_submission_after_required_check() {
        assert_eq!(
            validate_contact("田中", "not-an-email", "hi"),
            Err("有効なメールアドレスを入力してください。")
        );
        assert_eq!(validate_contact("田中", "x@y.com", "hi"), Ok(()));
    }
}

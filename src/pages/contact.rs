//! Contact page: channels on the left, the inquiry form on the right.
//!
//! The form drives a `ContactDraft` from josata-core. A valid submission
//! shows one acknowledgment modal and clears every field; submitted data
//! goes nowhere else.

use dioxus::prelude::*;
use josata_core::content::CONTACT_CHANNELS;
use josata_core::{Acknowledgment, ContactDraft};

use crate::components::{Icon, Reveal};
use crate::context::use_cursor_hot;

#[component]
pub fn Contact() -> Element {
    let mut cursor_hot = use_cursor_hot();
    let mut draft = use_signal(ContactDraft::default);
    let mut ack: Signal<Option<Acknowledgment>> = use_signal(|| None);
    let mut field_error: Signal<Option<String>> = use_signal(|| None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = draft.write().submit();
        match result {
            Ok(receipt) => {
                ack.set(Some(receipt));
                field_error.set(None);
            }
            Err(e) => {
                tracing::debug!("contact submission rejected: {}", e);
                field_error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div { class: "page contact",
            div { class: "contact-grid",
                // Left: channels
                div { class: "contact-intro",
                    Reveal {
                        span { class: "eyebrow azure", "Get In Touch" }
                        h1 { class: "page-title",
                            "Let's Discuss"
                            br {}
                            "Your Project"
                        }
                        p { class: "page-lede",
                            "Whether you have a question about our services, pricing, or \
                             anything else, our team is ready to answer all your questions."
                        }
                    }

                    div { class: "contact-channels",
                        for (idx, channel) in CONTACT_CHANNELS.iter().enumerate() {
                            Reveal { key: "{channel.title}", delay_ms: (idx as u32) * 150 + 200,
                                div { class: "contact-channel",
                                    div {
                                        class: if idx % 2 == 0 { "channel-icon azure" } else { "channel-icon violet" },
                                        Icon { name: channel.icon, size: 22 }
                                    }
                                    div {
                                        h4 { class: "channel-title", "{channel.title}" }
                                        p { class: "channel-hint", "{channel.hint}" }
                                        p {
                                            class: if idx % 2 == 0 { "channel-value azure" } else { "channel-value violet" },
                                            "{channel.value}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Right: the form
                Reveal { delay_ms: 300, class: "contact-form-reveal".to_string(),
                    div { class: "contact-form-panel",
                        div { class: "form-panel-glow" }
                        form { class: "contact-form", onsubmit: submit,
                            div { class: "form-row",
                                div { class: "form-field",
                                    label { class: "form-label", "Full Name" }
                                    input {
                                        class: "form-input",
                                        r#type: "text",
                                        required: true,
                                        placeholder: "John Doe",
                                        value: "{draft().name}",
                                        oninput: move |e| draft.write().name = e.value(),
                                    }
                                }
                                div { class: "form-field",
                                    label { class: "form-label", "Email Address" }
                                    input {
                                        class: "form-input",
                                        r#type: "email",
                                        required: true,
                                        placeholder: "john@example.com",
                                        value: "{draft().email}",
                                        oninput: move |e| draft.write().email = e.value(),
                                    }
                                }
                            }
                            div { class: "form-field",
                                label { class: "form-label", "Subject" }
                                input {
                                    class: "form-input",
                                    r#type: "text",
                                    required: true,
                                    placeholder: "How can we help?",
                                    value: "{draft().subject}",
                                    oninput: move |e| draft.write().subject = e.value(),
                                }
                            }
                            div { class: "form-field",
                                label { class: "form-label", "Message" }
                                textarea {
                                    class: "form-input",
                                    rows: "5",
                                    required: true,
                                    placeholder: "Tell us about your project details...",
                                    value: "{draft().message}",
                                    oninput: move |e| draft.write().message = e.value(),
                                }
                            }

                            if let Some(error) = field_error() {
                                p { class: "form-error", "{error}" }
                            }

                            button {
                                class: "form-submit",
                                r#type: "submit",
                                onmouseenter: move |_| cursor_hot.set(true),
                                onmouseleave: move |_| cursor_hot.set(false),
                                "Send Message "
                                Icon { name: "Send", size: 16 }
                            }
                        }
                    }
                }
            }

            // Acknowledgment modal
            if let Some(receipt) = ack() {
                div {
                    class: "ack-overlay",
                    tabindex: "0",
                    autofocus: true,
                    onclick: move |_| ack.set(None),
                    onkeydown: move |e| {
                        if e.key() == Key::Escape {
                            ack.set(None);
                        }
                    },

                    div {
                        class: "ack-modal",
                        onclick: move |e| e.stop_propagation(),

                        button {
                            class: "ack-close",
                            title: "Close (Esc)",
                            onclick: move |_| ack.set(None),
                            "\u{00d7}"
                        }
                        span { class: "ack-glyph", Icon { name: "Send", size: 28 } }
                        h3 { class: "ack-headline", "{receipt.headline}" }
                        p { class: "ack-detail", "{receipt.detail}" }
                    }
                }
            }
        }
    }
}

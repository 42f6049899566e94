//! Service card with hover-revealed description and detail bullets.
//!
//! The card carries its service id as the DOM id, which is what the
//! `?section=` deep links scroll to.

use dioxus::prelude::*;
use josata_core::content::Service;

use crate::components::Icon;
use crate::context::use_cursor_hot;

#[component]
pub fn ServiceCard(service: Service) -> Element {
    let mut cursor_hot = use_cursor_hot();
    let mut hovered = use_signal(|| false);

    let card_class = if hovered() {
        "service-card hovered"
    } else {
        "service-card"
    };

    rsx! {
        div {
            id: "{service.id}",
            class: card_class,
            onmouseenter: move |_| {
                hovered.set(true);
                cursor_hot.set(true);
            },
            onmouseleave: move |_| {
                hovered.set(false);
                cursor_hot.set(false);
            },

            // Background still with slow drift
            div { class: "service-card-bg",
                img { src: "{service.image}", alt: "{service.title}" }
                div { class: "service-card-shade" }
            }

            div { class: "service-card-body",
                div { class: "service-card-icon", Icon { name: service.icon, size: 28 } }
                h3 { class: "service-card-title", "{service.title}" }

                div { class: "service-card-desc",
                    p { "{service.description}" }
                    div { class: "service-card-wipe" }
                }

                div { class: "service-card-details",
                    for (idx, detail) in service.details.iter().enumerate() {
                        {
                            let delay_ms = (idx as u32 + 1) * 200 + 400;
                            rsx! {
                                div {
                                    key: "{idx}",
                                    class: "service-detail",
                                    style: "transition-delay: {delay_ms}ms;",
                                    span { class: "service-detail-dot" }
                                    span { class: "service-detail-text", "{detail}" }
                                }
                            }
                        }
                    }
                }

                div { class: "service-card-foot",
                    span { class: "service-foot-label", "Architectural Analysis" }
                    span { class: "service-foot-orb", Icon { name: "ArrowUpRight", size: 22 } }
                }
            }
        }
    }
}

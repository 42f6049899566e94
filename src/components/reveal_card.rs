//! Hover-reveal card: the sector frameworks on Solutions and the value
//! cards on About share this shape.

use dioxus::prelude::*;
use josata_core::content::RevealCard;

use crate::components::Icon;
use crate::context::use_cursor_hot;

#[derive(Props, Clone, PartialEq)]
pub struct RevealCardViewProps {
    pub card: RevealCard,
    /// Accent class: "azure" or "violet"
    pub accent: &'static str,
    /// Caption on the card's footer row
    pub foot_label: &'static str,
}

#[component]
pub fn RevealCardView(props: RevealCardViewProps) -> Element {
    let mut cursor_hot = use_cursor_hot();
    let mut hovered = use_signal(|| false);

    let card = props.card;
    let card_class = if hovered() {
        format!("reveal-card hovered {}", props.accent)
    } else {
        format!("reveal-card {}", props.accent)
    };

    rsx! {
        div {
            class: "{card_class}",
            onmouseenter: move |_| {
                hovered.set(true);
                cursor_hot.set(true);
            },
            onmouseleave: move |_| {
                hovered.set(false);
                cursor_hot.set(false);
            },

            div { class: "reveal-card-bg",
                img { src: "{card.image}", alt: "{card.title}" }
                div { class: "reveal-card-shade" }
            }

            div { class: "reveal-card-body",
                div { class: "reveal-card-icon", Icon { name: card.icon, size: 26 } }
                h3 { class: "reveal-card-title", "{card.title}" }

                div { class: "reveal-card-desc",
                    p { "{card.detail}" }
                    div { class: "reveal-card-wipe" }
                }

                div { class: "reveal-card-foot",
                    span { class: "reveal-foot-label", "{props.foot_label}" }
                    span { class: "reveal-foot-orb", Icon { name: "ArrowUpRight", size: 20 } }
                }
            }

            div { class: "reveal-card-beam" }
        }
    }
}

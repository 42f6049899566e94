//! Technology marquee: a looping strip of stack cards.

use dioxus::prelude::*;
use josata_core::content::TECHNOLOGIES;

#[component]
pub fn TechStack() -> Element {
    rsx! {
        section { class: "tech-stack",
            div { class: "section-heading",
                span { class: "pill azure", "Technologies We Master" }
                h2 { class: "section-title",
                    "Our "
                    span { class: "gradient-text", "Technology Stack" }
                }
            }

            div { class: "marquee-window",
                div { class: "marquee-track tech",
                    // Doubled list so the loop wraps seamlessly
                    for (idx, tech) in TECHNOLOGIES.iter().chain(TECHNOLOGIES.iter()).enumerate() {
                        div { key: "{idx}", class: "tech-card",
                            div { class: "tech-card-logo",
                                img { src: "{tech.url}", alt: "{tech.name}" }
                            }
                            span { class: "tech-card-name", "{tech.name}" }
                        }
                    }
                }
                div { class: "marquee-mask left" }
                div { class: "marquee-mask right" }
            }
        }
    }
}

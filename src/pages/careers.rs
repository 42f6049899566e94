//! Careers placeholder page.

use dioxus::prelude::*;

use crate::components::Reveal;

#[component]
pub fn Careers() -> Element {
    rsx! {
        div { class: "page careers",
            div { class: "placeholder-panel",
                Reveal {
                    span { class: "placeholder-status", "// Status: Updating" }
                    h1 { class: "placeholder-title", "Careers" }
                    p { class: "placeholder-lede",
                        "Our engineers are currently deploying a new architecture for this \
                         division. Check back shortly for our updated global roadmap."
                    }
                    div { class: "placeholder-rule" }
                }
            }
        }
    }
}

//! Staggered entrance wrapper.
//!
//! Children start translated down and transparent, then ease in after
//! `delay_ms`. Pages remount on navigation, so entrances replay per visit.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    #[props(default = 0)]
    pub delay_ms: u32,
    #[props(default)]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    rsx! {
        div {
            class: "reveal {props.class}",
            style: "animation-delay: {props.delay_ms}ms;",
            {props.children}
        }
    }
}

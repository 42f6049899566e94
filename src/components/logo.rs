//! Brand lockup: "JOSATA" over a letter-spaced "TECHNOLOGIES".

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LogoProps {
    /// Hide the sub-brand line on narrow screens (used inside the open menu)
    #[props(default = false)]
    pub compact: bool,
}

#[component]
pub fn Logo(props: LogoProps) -> Element {
    let sub_class = if props.compact {
        "logo-sub compact"
    } else {
        "logo-sub"
    };

    rsx! {
        div { class: "logo",
            span { class: "logo-main",
                "JOSATA"
                span { class: "logo-shimmer" }
            }
            span { class: sub_class, "Technologies" }
            div { class: "logo-underline" }
        }
    }
}

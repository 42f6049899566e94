//! Gradient call-to-action button.
//!
//! Clicking plays a brief engage state before navigating, matching the site's
//! deliberate, cinematic pacing.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Icon;
use crate::context::use_cursor_hot;

/// Delay between click and navigation, during which the spinner shows.
const ENGAGE_MS: u64 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SiteButtonProps {
    #[props(default = ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    /// Destination pushed after the engage delay
    pub to: Option<Route>,
    /// Extra classes appended to the base button classes
    #[props(default)]
    pub class: String,
    /// Optional click handler, called before any navigation
    pub onclick: Option<EventHandler<()>>,
    pub children: Element,
}

#[component]
pub fn SiteButton(props: SiteButtonProps) -> Element {
    let navigator = use_navigator();
    let mut cursor_hot = use_cursor_hot();
    let mut busy = use_signal(|| false);

    let to = props.to.clone();
    let onclick_cb = props.onclick;
    let engage = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        let to = to.clone();
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ENGAGE_MS)).await;
            if let Some(handler) = onclick_cb {
                handler.call(());
            }
            if let Some(route) = to {
                navigator.push(route);
            }
            busy.set(false);
        });
    };

    let state_class = if busy() { "busy" } else { "" };

    rsx! {
        button {
            class: "site-btn {props.variant.class()} {state_class} {props.class}",
            disabled: busy(),
            onclick: engage,
            onmouseenter: move |_| cursor_hot.set(true),
            onmouseleave: move |_| cursor_hot.set(false),

            if busy() {
                span { class: "btn-spinner", Icon { name: "Loader", size: 16 } }
                span { "Loading..." }
            } else {
                {props.children}
            }
        }
    }
}

//! Route transition: scan-line sweep played over each navigation.
//!
//! Also resets the scroll position, so every page opens at its top.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::Route;

/// How long the sweep stays on screen, matching the CSS animation.
const SWEEP_MS: u64 = 600;

#[component]
pub fn RouteTransition() -> Element {
    let route = use_route::<Route>();
    let mut sweeping = use_signal(|| false);

    let nav_path = route.nav_path();
    use_effect(use_reactive!(|nav_path| {
        let _ = nav_path;
        document::eval("document.getElementById('site-scroll')?.scrollTo({ top: 0, behavior: 'instant' });");
        sweeping.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(SWEEP_MS)).await;
            sweeping.set(false);
        });
    }));

    let layer_class = if sweeping() {
        "route-sweep active"
    } else {
        "route-sweep"
    };

    rsx! {
        div { class: layer_class,
            div { class: "route-sweep-line" }
            div { class: "route-sweep-haze" }
        }
    }
}

//! Navigation bar.
//!
//! Desktop: fixed header with hover dropdowns and a CTA button; condenses
//! once the page scrolls. Mobile: hamburger toggling a full-screen overlay
//! with staggered entrances and per-item accordions. All menu state resets
//! when the route changes.

use dioxus::document;
use dioxus::prelude::*;
use josata_core::content::{self, NavItem};

use crate::app::Route;
use crate::components::{Icon, Logo, SiteButton};
use crate::context::use_cursor_hot;

/// Scroll offset past which the header condenses.
const CONDENSE_AT: f64 = 20.0;

#[component]
pub fn NavBar() -> Element {
    let route = use_route::<Route>();
    let mut cursor_hot = use_cursor_hot();

    let mut condensed = use_signal(|| false);
    let mut menu_open = use_signal(|| false);
    let mut open_accordion: Signal<Option<&'static str>> = use_signal(|| None);

    // Poll the scroll container; cheap, and dies with the navbar scope.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(250)).await;
                let eval = document::eval(
                    "return document.getElementById('site-scroll')?.scrollTop ?? 0;",
                );
                if let Ok(value) = eval.await {
                    if let Some(top) = value.as_f64() {
                        condensed.set(top > CONDENSE_AT);
                    }
                }
            }
        });
    });

    // Reset menu state on route change
    let nav_path = route.nav_path();
    use_effect(use_reactive!(|nav_path| {
        let _ = nav_path;
        menu_open.set(false);
        open_accordion.set(None);
    }));

    let bar_class = if condensed() || menu_open() {
        "navbar condensed"
    } else {
        "navbar"
    };
    let overlay_class = if menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    rsx! {
        nav { class: bar_class,
            div { class: "navbar-inner",
                div {
                    class: "navbar-brand",
                    onmouseenter: move |_| cursor_hot.set(true),
                    onmouseleave: move |_| cursor_hot.set(false),
                    Link { to: Route::Home {},
                        Logo { compact: menu_open() }
                    }
                }

                // Desktop links
                div { class: "nav-links",
                    for item in content::NAV_ITEMS {
                        NavEntry { item: *item, active: nav_path == item.path }
                    }
                    SiteButton {
                        to: Route::Contact {},
                        class: "nav-cta".to_string(),
                        "Start Project"
                    }
                }

                // Mobile toggle
                button {
                    class: "menu-toggle",
                    "aria-label": "Toggle Menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { name: "X", size: 24 }
                    } else {
                        Icon { name: "Menu", size: 24 }
                    }
                }
            }

            // Mobile overlay
            div { class: overlay_class,
                div { class: "mobile-menu-grid" }
                div { class: "mobile-menu-items",
                    for (index, item) in content::NAV_ITEMS.iter().enumerate() {
                        MobileEntry {
                            item: *item,
                            active: nav_path == item.path,
                            delay_ms: (index as u32) * 50 + 200,
                            expanded: open_accordion() == Some(item.label),
                            on_toggle: move |label| {
                                if open_accordion() == Some(label) {
                                    open_accordion.set(None);
                                } else {
                                    open_accordion.set(Some(label));
                                }
                            },
                        }
                    }

                    div { class: "mobile-menu-footer",
                        SiteButton {
                            to: Route::Contact {},
                            class: "mobile-cta".to_string(),
                            "Protocol Initiate"
                        }
                        div { class: "mobile-menu-nodes",
                            div { class: "node-badge",
                                span { class: "node-dot azure" }
                                span { class: "node-label", "Node.01" }
                            }
                            div { class: "node-badge",
                                span { class: "node-dot violet" }
                                span { class: "node-label", "Sync.Active" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One desktop nav entry with its underline and optional hover dropdown.
#[component]
fn NavEntry(item: NavItem, active: bool) -> Element {
    let mut cursor_hot = use_cursor_hot();
    let link_class = if active { "nav-link active" } else { "nav-link" };
    let underline_class = if active {
        "nav-underline active"
    } else {
        "nav-underline"
    };

    rsx! {
        div {
            class: "nav-item",
            onmouseenter: move |_| cursor_hot.set(true),
            onmouseleave: move |_| cursor_hot.set(false),

            Link { to: Route::for_path(item.path, ""), class: link_class,
                "{item.label}"
                if !item.dropdown.is_empty() {
                    span { class: "nav-chevron", Icon { name: "ChevronDown", size: 12 } }
                }
            }
            div { class: underline_class }

            if !item.dropdown.is_empty() {
                div { class: "nav-dropdown",
                    div { class: "nav-dropdown-panel",
                        for link in item.dropdown {
                            Link {
                                to: Route::for_path(link.path, link.section),
                                class: "nav-dropdown-link",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One row of the mobile overlay, with accordion sub-links when present.
#[component]
fn MobileEntry(
    item: NavItem,
    active: bool,
    delay_ms: u32,
    expanded: bool,
    on_toggle: EventHandler<&'static str>,
) -> Element {
    let title_class = if active {
        "mobile-link-title active"
    } else {
        "mobile-link-title"
    };
    let sub_class = if expanded {
        "mobile-sublinks open"
    } else {
        "mobile-sublinks"
    };

    rsx! {
        div {
            class: "mobile-menu-item",
            style: "transition-delay: {delay_ms}ms;",

            div { class: "mobile-link-row",
                if item.dropdown.is_empty() {
                    Link { to: Route::for_path(item.path, ""), class: "mobile-link",
                        span { class: title_class, "{item.label}" }
                    }
                    span { class: "mobile-link-arrow", Icon { name: "ArrowRight", size: 20 } }
                } else {
                    button {
                        class: "mobile-link",
                        onclick: move |_| on_toggle.call(item.label),
                        span { class: title_class, "{item.label}" }
                    }
                    button {
                        class: "mobile-accordion-toggle",
                        onclick: move |_| on_toggle.call(item.label),
                        if expanded {
                            Icon { name: "Minus", size: 20 }
                        } else {
                            Icon { name: "Plus", size: 20 }
                        }
                    }
                }
            }

            if !item.dropdown.is_empty() {
                div { class: sub_class,
                    for link in item.dropdown {
                        Link {
                            to: Route::for_path(link.path, link.section),
                            class: "mobile-sublink",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

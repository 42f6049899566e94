use dioxus::prelude::*;

use crate::pages::{About, Careers, Contact, Home, Services, Solutions};
use crate::shell::SiteShell;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home with hero, stats, services and testimonials
/// - `/about` - Company story and values
/// - `/services` - Service catalog; `?section=<id>` scrolls a card into view
/// - `/solutions` - Sector frameworks; `?section=<id>` deep links supported
/// - `/careers` - Placeholder while the division relaunches
/// - `/contact` - Contact channels and the inquiry form
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services?:section")]
    Services { section: String },
    #[route("/solutions?:section")]
    Solutions { section: String },
    #[route("/careers")]
    Careers {},
    #[route("/contact")]
    Contact {},
}

impl Route {
    /// The catalog path this route highlights in the navbar.
    pub fn nav_path(&self) -> &'static str {
        match self {
            Route::Home {} => "/",
            Route::About {} => "/about",
            Route::Services { .. } => "/services",
            Route::Solutions { .. } => "/solutions",
            Route::Careers {} => "/careers",
            Route::Contact {} => "/contact",
        }
    }

    /// Route for a catalog path, optionally deep-linking a page section.
    pub fn for_path(path: &str, section: &str) -> Self {
        match path {
            "/about" => Route::About {},
            "/services" => Route::Services {
                section: section.to_string(),
            },
            "/solutions" => Route::Solutions {
                section: section.to_string(),
            },
            "/careers" => Route::Careers {},
            "/contact" => Route::Contact {},
            _ => Route::Home {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, the pointer/cursor context, and routing.
#[component]
pub fn App() -> Element {
    // Latest pointer position in client pixels; None until the first move
    let pointer: Signal<Option<(f64, f64)>> = use_signal(|| None);
    // Whether the pointer is over an interactive element
    let cursor_hot: Signal<bool> = use_signal(|| false);

    use_context_provider(|| pointer);
    use_context_provider(|| cursor_hot);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

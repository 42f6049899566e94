//! Site shell: the chrome wrapped around every page.
//!
//! The shell is the router layout. It owns the scroll container, captures
//! pointer movement for the cursor and the particle field, and stacks the
//! fixed layers (background, navbar, transition sweep, custom cursor)
//! around the routed page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CustomCursor, NavBar, PlexusBackground, RouteTransition, SiteFooter};
use crate::context::use_pointer;

#[component]
pub fn SiteShell() -> Element {
    let mut pointer = use_pointer();

    rsx! {
        div {
            id: "site-scroll",
            class: "site-shell",
            onmousemove: move |evt| {
                let p = evt.client_coordinates();
                pointer.set(Some((p.x, p.y)));
            },

            // Ambient layers, fixed behind and above the page
            PlexusBackground {}
            RouteTransition {}
            CustomCursor {}

            NavBar {}

            main { class: "page-outlet",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

//! Custom cursor: a lagging ring plus a tight dot.
//!
//! Hidden until the pointer first moves. The ring inflates while an
//! interactive element reports heat via the cursor context.

use dioxus::prelude::*;

use crate::context::{use_cursor_hot, use_pointer};

#[component]
pub fn CustomCursor() -> Element {
    let pointer = use_pointer();
    let hot = use_cursor_hot();

    let Some((x, y)) = pointer() else {
        return rsx! {};
    };

    let ring_class = if hot() {
        "cursor-ring hot"
    } else {
        "cursor-ring"
    };

    rsx! {
        div {
            class: ring_class,
            style: "left: {x}px; top: {y}px;",
        }
        div {
            class: "cursor-dot",
            style: "left: {x}px; top: {y}px;",
        }
    }
}

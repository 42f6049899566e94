//! Shared UI context for the Josata site.
//!
//! Both signals are provided by the root `App` component and read anywhere
//! below it via these hooks.

use dioxus::prelude::*;

/// Hook to access the latest pointer position in client pixels.
///
/// `None` until the pointer has moved at least once; the custom cursor and
/// the particle field both stay dormant until then.
pub fn use_pointer() -> Signal<Option<(f64, f64)>> {
    use_context::<Signal<Option<(f64, f64)>>>()
}

/// Hook to access the cursor heat flag.
///
/// Interactive components set this on mouse enter/leave; the custom cursor
/// ring inflates while it is set.
pub fn use_cursor_hot() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

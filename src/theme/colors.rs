//! Color constants for the Josata site.
//!
//! Cinematic dark aesthetic: near-black panels with an azure/violet
//! gradient running through everything interactive.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK: &str = "#050505";
pub const INK_DEEP: &str = "#02040a";
pub const PANEL: &str = "#0a0a0a";
pub const PANEL_RAISED: &str = "#111111";
pub const CARD: &str = "#0d0d0d";
pub const FIELD: &str = "#1a1a1a";

// === AZURE (Technology, Links, Primary) ===
pub const AZURE: &str = "#00a3ff";
pub const AZURE_GLOW: &str = "rgba(0, 163, 255, 0.3)";

// === VIOLET (Accents, Secondary) ===
pub const VIOLET: &str = "#a855f7";
pub const VIOLET_GLOW: &str = "rgba(168, 85, 247, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#9ca3af";
pub const TEXT_MUTED: &str = "#6b7280";

// === LINES ===
pub const BORDER_FAINT: &str = "rgba(255, 255, 255, 0.05)";
pub const BORDER_SOFT: &str = "rgba(255, 255, 255, 0.1)";

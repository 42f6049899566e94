#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod shell;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Background field tuning, set once from the command line.
#[derive(Debug, Clone, Copy)]
pub struct FieldSettings {
    pub particles: usize,
    pub seed: u64,
}

static FIELD_SETTINGS: OnceLock<FieldSettings> = OnceLock::new();

/// Get the particle field settings (from the command line or defaults).
pub fn field_settings() -> FieldSettings {
    FIELD_SETTINGS.get().copied().unwrap_or(FieldSettings {
        particles: 150,
        seed: 2018,
    })
}

/// Josata Technologies - IT consulting marketing site
#[derive(Parser, Debug)]
#[command(name = "josata-site")]
#[command(about = "Josata Technologies - marketing site for the desktop")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Number of points in the background particle field
    #[arg(short, long, default_value_t = 150)]
    particles: usize,

    /// Seed for the particle field (same seed, same field)
    #[arg(short, long, default_value_t = 2018)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = FIELD_SETTINGS.set(FieldSettings {
        particles: args.particles.max(1),
        seed: args.seed,
    });

    tracing::info!(
        particles = args.particles,
        seed = args.seed,
        "Starting Josata Technologies site"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Josata Technologies")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

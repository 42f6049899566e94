//! Global particle-field background.
//!
//! Owns a `PlexusField` from josata-core and drives it with a frame loop
//! scoped to this component: the loop dies with the scope, so unmounting
//! releases the per-frame callback. Each frame the field is stepped,
//! projected through the scene camera, and handed to an SVG layer as
//! circles and line segments.

use dioxus::prelude::*;
use glam::Vec2;
use josata_core::{Camera, PlexusConfig, PlexusField};

/// Roughly 30 frames per second; plenty for a background layer.
const FRAME_MS: u64 = 33;

/// A point ready to draw: screen position and depth-derived opacity.
#[derive(Clone, PartialEq)]
struct ScreenPoint {
    x: f32,
    y: f32,
    opacity: f32,
}

/// A link ready to draw, as a screen-space segment.
#[derive(Clone, PartialEq)]
struct ScreenLink {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// One rendered frame of the field.
#[derive(Clone, PartialEq, Default)]
struct FrameSnapshot {
    points: Vec<ScreenPoint>,
    links: Vec<ScreenLink>,
}

impl FrameSnapshot {
    fn capture(field: &PlexusField, camera: &Camera, width: f64, height: f64) -> Self {
        let to_px = |ndc: Vec2| -> (f32, f32) {
            (
                ((ndc.x + 1.0) / 2.0) * width as f32,
                ((1.0 - ndc.y) / 2.0) * height as f32,
            )
        };

        let projected: Vec<_> = (0..field.points().len())
            .map(|i| field.project(i, camera))
            .collect();

        let points = projected
            .iter()
            .flatten()
            .map(|p| {
                let (x, y) = to_px(p.ndc);
                ScreenPoint {
                    x,
                    y,
                    // Fog: far points fade toward the backdrop
                    opacity: (1.0 - (p.depth - 5.0) / 30.0).clamp(0.15, 0.85),
                }
            })
            .collect();

        let links = field
            .links()
            .iter()
            .filter_map(|&(i, j)| match (projected[i], projected[j]) {
                (Some(a), Some(b)) => {
                    let (x1, y1) = to_px(a.ndc);
                    let (x2, y2) = to_px(b.ndc);
                    Some(ScreenLink { x1, y1, x2, y2 })
                }
                _ => None,
            })
            .collect();

        Self { points, links }
    }
}

#[component]
pub fn PlexusBackground() -> Element {
    let pointer = crate::context::use_pointer();
    let mut size: Signal<Option<(f64, f64)>> = use_signal(|| None);
    let mut frame: Signal<FrameSnapshot> = use_signal(FrameSnapshot::default);

    // Frame loop. Scoped to this component; cancelled on unmount.
    use_effect(move || {
        spawn(async move {
            let settings = crate::field_settings();
            let config = PlexusConfig {
                point_count: settings.particles,
                ..Default::default()
            };
            let mut field = match PlexusField::new(config, settings.seed) {
                Ok(field) => field,
                Err(e) => {
                    tracing::error!("Failed to build particle field: {}", e);
                    return;
                }
            };
            tracing::debug!(
                points = field.points().len(),
                "particle field running"
            );

            let started = std::time::Instant::now();
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(FRAME_MS)).await;

                // Skip frames until the layer has reported its size.
                let Some((width, height)) = size() else {
                    continue;
                };

                let camera = Camera::new((width / height.max(1.0)) as f32);
                let world_pointer = pointer().map(|(px, py)| {
                    let ndc = Vec2::new(
                        (px / width * 2.0 - 1.0) as f32,
                        (1.0 - py / height * 2.0) as f32,
                    );
                    camera.unproject(ndc)
                });

                field.step(started.elapsed().as_secs_f32(), world_pointer);
                frame.set(FrameSnapshot::capture(&field, &camera, width, height));
            }
        });
    });

    let snapshot = frame();

    rsx! {
        div {
            class: "plexus-layer",
            onmounted: move |evt| async move {
                if let Ok(rect) = evt.get_client_rect().await {
                    size.set(Some((rect.size.width, rect.size.height)));
                }
            },
            onresize: move |evt| {
                if let Ok(new_size) = evt.get_border_box_size() {
                    size.set(Some((new_size.width, new_size.height)));
                }
            },

            svg { class: "plexus-canvas", width: "100%", height: "100%",
                for (i, link) in snapshot.links.iter().enumerate() {
                    line {
                        key: "l{i}",
                        x1: "{link.x1:.1}",
                        y1: "{link.y1:.1}",
                        x2: "{link.x2:.1}",
                        y2: "{link.y2:.1}",
                        class: "plexus-link",
                    }
                }
                for (i, point) in snapshot.points.iter().enumerate() {
                    circle {
                        key: "p{i}",
                        cx: "{point.x:.1}",
                        cy: "{point.y:.1}",
                        r: "1.6",
                        opacity: "{point.opacity:.2}",
                        class: "plexus-point",
                    }
                }
            }

            // Cinematic overlays above the canvas
            div { class: "plexus-vignette" }
            div { class: "plexus-scanline slow" }
            div { class: "plexus-scanline delayed" }
        }
    }
}

//! Home hero: headline, CTAs, and the sliding image panel with its HUD.

use dioxus::prelude::*;
use josata_core::content::HERO_SLIDES;
use josata_core::Rotor;

use crate::app::Route;
use crate::components::{ButtonVariant, Icon, Reveal, SiteButton};

/// Seconds each hero slide stays on screen.
const SLIDE_SECS: u64 = 6;

#[component]
pub fn Hero() -> Element {
    let mut rotor = use_signal(|| Rotor::new(HERO_SLIDES.len()));

    // Slide timer; dies with the hero scope.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(SLIDE_SECS)).await;
                rotor.write().advance();
            }
        });
    });

    let current = rotor().current();
    let previous = rotor().previous();
    let slide = &HERO_SLIDES[current];

    rsx! {
        section { class: "hero",
            div { class: "hero-grid",
                // Left: copy
                div { class: "hero-copy",
                    Reveal { delay_ms: 100,
                        span { class: "hero-badge",
                            span { class: "badge-dot" }
                            "Architecting Digital Futures"
                        }
                    }
                    Reveal { delay_ms: 300,
                        h1 { class: "hero-title",
                            span { class: "gradient-flow", "JOSATA" }
                            span { class: "gradient-flow", "TECHNOLOGIES" }
                        }
                    }
                    Reveal { delay_ms: 500,
                        p { class: "hero-lede",
                            "Specialized digital ecosystems engineered for sovereignty and \
                             performance. Connecting hardware and software into high-speed \
                             structural reality."
                        }
                    }
                    Reveal { delay_ms: 700, class: "hero-actions".to_string(),
                        SiteButton {
                            to: Route::for_path("/services", ""),
                            class: "hero-cta".to_string(),
                            "Capabilities"
                            Icon { name: "ArrowRight", size: 16 }
                        }
                        SiteButton {
                            variant: ButtonVariant::Ghost,
                            class: "hero-alt".to_string(),
                            span { class: "hero-play-ring", Icon { name: "Play", size: 12 } }
                            "Core Methodology"
                        }
                    }
                }

                // Right: sliding media panel
                Reveal { delay_ms: 500, class: "hero-media-reveal".to_string(),
                    div { class: "hero-media",
                        div { class: "hero-slides",
                            for (idx, s) in HERO_SLIDES.iter().enumerate() {
                                div {
                                    key: "{idx}",
                                    class: slide_class(idx, current, previous),
                                    img {
                                        class: "hero-slide-img",
                                        src: "{s.url}",
                                        alt: "{s.label}",
                                    }
                                }
                            }
                            div { class: "hero-slide-shade" }
                        }

                        // HUD overlay
                        div { class: "hero-hud",
                            div { class: "hero-hud-top",
                                div { class: "hud-ticks",
                                    span { class: "hud-tick wide" }
                                    span { class: "hud-tick azure" }
                                }
                                p { class: "hud-code", "{slide.code}" }
                            }
                            div { class: "hero-hud-bottom",
                                div { class: "hud-rule" }
                                div { class: "hero-hud-row",
                                    div {
                                        p { class: "hud-label", "{slide.label}" }
                                        h3 { class: "hud-title",
                                            "JOSATA"
                                            br {}
                                            span { class: "dim", "TECHNOLOGIES" }
                                        }
                                    }
                                    div { class: "hud-chip", Icon { name: "Cpu", size: 24 } }
                                }
                            }
                        }

                        // Scrubber; keyed so the fill animation restarts per slide
                        div { class: "hero-scrubber",
                            for idx in [current] {
                                div { key: "{idx}", class: "hero-scrubber-fill" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn slide_class(idx: usize, current: usize, previous: usize) -> &'static str {
    if idx == current {
        "hero-slide on"
    } else if idx == previous {
        "hero-slide out"
    } else {
        "hero-slide off"
    }
}

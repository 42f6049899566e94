//! Cinematic image slider used by the About and Solutions pages.
//!
//! Crossfading slides behind a HUD: a code badge top-left, a pulsing icon
//! top-right, and the slide label over clickable progress bars. Advances on
//! a fixed interval owned by this scope.

use dioxus::prelude::*;
use josata_core::content::Slide;
use josata_core::Rotor;

use crate::components::Icon;

/// Seconds each slide stays on screen.
const SLIDE_SECS: u64 = 6;

#[derive(Props, Clone, PartialEq)]
pub struct CinematicSliderProps {
    pub slides: &'static [Slide],
    /// Accent class: "azure" or "violet"
    pub accent: &'static str,
    /// Icon pulsing in the top-right chip
    pub icon: &'static str,
    /// Small caption above the slide label
    pub caption: &'static str,
}

#[component]
pub fn CinematicSlider(props: CinematicSliderProps) -> Element {
    let slides = props.slides;
    let mut rotor = use_signal(|| Rotor::new(slides.len()));

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(SLIDE_SECS)).await;
                rotor.write().advance();
            }
        });
    });

    let current = rotor().current();
    let slide = &slides[current];

    rsx! {
        div { class: "cine-slider {props.accent}",
            div { class: "cine-slides",
                for (idx, s) in slides.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: if idx == current { "cine-slide on" } else { "cine-slide" },
                        img { class: "cine-slide-img", src: "{s.url}", alt: "{s.label}" }
                        div { class: "cine-slide-shade" }
                    }
                }
            }

            div { class: "cine-hud",
                div { class: "cine-hud-top",
                    div { class: "cine-code-badge",
                        p { class: "cine-code", "{slide.code}" }
                        div { class: "cine-code-rule" }
                    }
                    div { class: "cine-chip", Icon { name: props.icon, size: 20 } }
                }

                div { class: "cine-hud-bottom",
                    div {
                        p { class: "cine-caption", "{props.caption}" }
                        h3 { class: "cine-label", "{slide.label}" }
                    }
                    div { class: "cine-bars",
                        for idx in 0..slides.len() {
                            button {
                                key: "{idx}",
                                class: if idx == current { "cine-bar on" } else { "cine-bar" },
                                "aria-label": "Show slide {idx + 1}",
                                onclick: move |_| rotor.write().select(idx),
                            }
                        }
                    }
                }
            }

            div { class: "cine-scanline" }
        }
    }
}

//! Solutions page: adaptive-intelligence pitch, cinematic slider, sector
//! frameworks, and the ecosystem CTA. Supports `?section=` deep links into
//! the "digital" and "enterprise" sections.

use dioxus::document;
use dioxus::prelude::*;
use josata_core::content::{self, SOLUTION_SLIDES};

use crate::app::Route;
use crate::components::{CinematicSlider, Icon, Reveal, RevealCardView, SiteButton};

#[component]
pub fn Solutions(section: String) -> Element {
    use_effect(use_reactive!(|section| {
        if !section.is_empty() {
            if !content::SOLUTION_SECTIONS.contains(&section.as_str()) {
                tracing::warn!(%section, "solutions deep link does not resolve");
                return;
            }
            let section = section.clone();
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(650)).await;
                document::eval(&format!(
                    "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
                    section
                ));
            });
        }
    }));

    rsx! {
        div { class: "page solutions",
            section { class: "split-hero",
                div { class: "split-hero-copy",
                    Reveal {
                        span { class: "hero-badge azure",
                            span { class: "badge-dot" }
                            "Strategic Deployment Protocol"
                        }
                        h1 { class: "display-title",
                            "Evolving"
                            br {}
                            span { class: "gradient-flow", "Intelligence" }
                        }
                        p { class: "display-lede",
                            "Engineering specialized software ecosystems that adapt to market \
                             volatility in real-time. We architect digital sovereignty for the \
                             global elite."
                        }
                        div { class: "split-hero-actions",
                            SiteButton {
                                to: Route::Contact {},
                                class: "split-cta".to_string(),
                                "Consultation"
                            }
                            div { class: "status-note",
                                span { class: "status-rule" }
                                "System Status: Active"
                            }
                        }
                    }
                }

                Reveal { delay_ms: 300, class: "split-hero-media".to_string(),
                    CinematicSlider {
                        slides: SOLUTION_SLIDES,
                        accent: "azure",
                        icon: "Database",
                        caption: "Strategic Module",
                    }
                }
            }

            section { id: "digital", class: "framework-section",
                div { class: "section-heading",
                    span { class: "eyebrow violet", "Vertical Integration" }
                    h2 { class: "section-title caps", "Sector Frameworks" }
                    div { class: "heading-rule" }
                }
                div { class: "card-grid four",
                    for (idx, sector) in content::SECTORS.iter().enumerate() {
                        Reveal { key: "{sector.title}", delay_ms: (idx as u32) * 100,
                            RevealCardView {
                                card: *sector,
                                accent: "azure",
                                foot_label: "Structural Sync",
                            }
                        }
                    }
                }
            }

            section { id: "enterprise", class: "cta-section",
                div { class: "cta-panel",
                    Reveal {
                        h2 { class: "cta-title",
                            "Initiate Your"
                            br {}
                            span { class: "gradient-flow", "Ecosystem Sync" }
                        }
                        p { class: "cta-lede",
                            "Our principal engineers build the custom logic your market \
                             dominance requires. Secure your architecture session today."
                        }
                        div { class: "cta-actions",
                            SiteButton {
                                to: Route::Contact {},
                                class: "cta-primary".to_string(),
                                "Protocol Start"
                                Icon { name: "ArrowUpRight", size: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}

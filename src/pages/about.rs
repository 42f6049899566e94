//! About page: origin story, the cinematic team slider, the "Dynamic Code"
//! value cards, and the global-hub CTA.

use dioxus::prelude::*;
use josata_core::content::{self, ABOUT_SLIDES};

use crate::app::Route;
use crate::components::{CinematicSlider, Icon, Reveal, RevealCardView, SiteButton};

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page about",
            section { class: "split-hero",
                div { class: "split-hero-copy",
                    Reveal {
                        span { class: "hero-badge violet",
                            span { class: "badge-dot violet" }
                            "Origin & Evolution"
                        }
                        h1 { class: "display-title",
                            "Defining"
                            br {}
                            span { class: "gradient-flow", "Excellence" }
                        }
                        p { class: "display-lede",
                            "Founded on the principles of architectural precision and digital \
                             sovereignty. We are not just developers; we are the architects of \
                             your digital legacy."
                        }
                        div { class: "split-hero-actions",
                            SiteButton {
                                to: Route::Contact {},
                                class: "split-cta violet".to_string(),
                                "Our Mission"
                            }
                            div { class: "status-note",
                                span { class: "status-rule" }
                                "Since 2018"
                            }
                        }
                    }
                }

                Reveal { delay_ms: 300, class: "split-hero-media".to_string(),
                    CinematicSlider {
                        slides: ABOUT_SLIDES,
                        accent: "violet",
                        icon: "Users",
                        caption: "Enterprise Vision",
                    }
                }
            }

            section { class: "framework-section",
                div { class: "section-heading",
                    span { class: "eyebrow azure", "Ethical Framework" }
                    h2 { class: "section-title caps", "The Dynamic Code" }
                    div { class: "heading-rule violet" }
                }
                div { class: "card-grid four",
                    for (idx, value) in content::VALUES.iter().enumerate() {
                        Reveal { key: "{value.title}", delay_ms: (idx as u32) * 100,
                            RevealCardView {
                                card: *value,
                                accent: "violet",
                                foot_label: "Core Protocol",
                            }
                        }
                    }
                }
            }

            section { class: "cta-section",
                div { class: "cta-panel",
                    Reveal {
                        h2 { class: "cta-title",
                            "A Global Hub of"
                            br {}
                            span { class: "gradient-flow", "Architectural Genius" }
                        }
                        p { class: "cta-lede",
                            "Based in Visakhapatnam, serving the world's most ambitious \
                             enterprises. Our center of excellence is ready for your next \
                             breakthrough."
                        }
                        div { class: "cta-actions",
                            SiteButton {
                                to: Route::Contact {},
                                class: "cta-primary".to_string(),
                                "Join the Network"
                                Icon { name: "Globe", size: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}

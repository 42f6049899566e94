//! Home page: hero, partner marquee, tech stack, stats, services,
//! testimonials, and the closing call to action.

use dioxus::prelude::*;
use josata_core::content::{self, PARTNER_LOGOS};

use crate::app::Route;
use crate::components::{
    ButtonVariant, Hero, Icon, Reveal, ServiceCard, SiteButton, StatsBand, TechStack,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page home",
            Hero {}

            // Partner marquee
            section { class: "partner-strip",
                p { class: "partner-caption", "Trusted by Industry Leaders" }
                div { class: "marquee-window",
                    div { class: "marquee-track partners",
                        // Tripled so the fast loop never shows a seam
                        for (idx, logo) in PARTNER_LOGOS
                            .iter()
                            .chain(PARTNER_LOGOS.iter())
                            .chain(PARTNER_LOGOS.iter())
                            .enumerate()
                        {
                            img {
                                key: "{idx}",
                                class: "partner-logo",
                                src: "{logo.url}",
                                alt: "{logo.name}",
                            }
                        }
                    }
                }
            }

            TechStack {}
            StatsBand {}

            // Services grid
            section { class: "services-section",
                div { class: "section-heading",
                    span { class: "eyebrow azure", "Capabilities" }
                    h2 { class: "section-title", "Our Core Expertise" }
                    div { class: "heading-rule" }
                    p { class: "section-lede",
                        "We deliver top-tier technology solutions designed to solve complex \
                         business challenges and drive sustainable digital transformation."
                    }
                }
                div { class: "card-grid three",
                    for service in content::services() {
                        ServiceCard { key: "{service.id}", service: *service }
                    }
                }
            }

            // Testimonials
            section { class: "testimonials",
                div { class: "section-heading",
                    span { class: "eyebrow violet", "Client Intelligence" }
                    h2 { class: "section-title", "Consensus & Feedback" }
                }
                div { class: "card-grid three",
                    for (idx, t) in content::TESTIMONIALS.iter().enumerate() {
                        Reveal {
                            delay_ms: (idx as u32) * 100,
                            class: "testimonial-reveal".to_string(),
                            div { class: "testimonial-card",
                                div { class: "testimonial-stars",
                                    for star in 0..5 {
                                        span { key: "{star}", Icon { name: "Zap", size: 14 } }
                                    }
                                }
                                p { class: "testimonial-quote", "\"{t.quote}\"" }
                                div { class: "testimonial-author",
                                    img { class: "testimonial-avatar", src: "{t.avatar}", alt: "{t.name}" }
                                    div {
                                        h5 { class: "testimonial-name", "{t.name}" }
                                        p { class: "testimonial-role", "{t.role}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Final CTA
            section { class: "cta-section",
                div { class: "cta-panel",
                    Reveal {
                        h2 { class: "cta-title",
                            "Let's Architect"
                            br {}
                            span { class: "gradient-flow", "Your Legacy" }
                        }
                        p { class: "cta-lede",
                            "Secure a strategic session with our principal engineers to unlock \
                             the true potential of your digital ecosystem."
                        }
                        div { class: "cta-actions",
                            SiteButton {
                                to: Route::Contact {},
                                class: "cta-primary".to_string(),
                                "Initiate Project"
                            }
                            SiteButton {
                                variant: ButtonVariant::Ghost,
                                class: "cta-alt".to_string(),
                                "Exploration Mode"
                                Icon { name: "ArrowRight", size: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}

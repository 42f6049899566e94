//! Services page: catalog grid plus the delivery process band.
//!
//! Honors `?section=<service-id>` deep links by scrolling the addressed
//! card into view once the route transition has settled.

use dioxus::document;
use dioxus::prelude::*;
use josata_core::content::{self, PROCESS_STEPS};

use crate::components::{Icon, Reveal, ServiceCard};

#[component]
pub fn Services(section: String) -> Element {
    // Deep link: scroll the addressed card into view after the sweep.
    use_effect(use_reactive!(|section| {
        if !section.is_empty() {
            if content::service_by_id(&section).is_none() {
                tracing::warn!(%section, "services deep link does not resolve");
                return;
            }
            let section = section.clone();
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(650)).await;
                document::eval(&format!(
                    "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'center' }});",
                    section
                ));
            });
        }
    }));

    rsx! {
        div { class: "page services",
            section { class: "page-header",
                Reveal {
                    span { class: "eyebrow violet", "What We Do" }
                    h1 { class: "page-title",
                        "Superior Tech "
                        span { class: "azure-text", "Expertise" }
                    }
                    p { class: "page-lede",
                        "From modernizing legacy stacks to building AI-driven cloud \
                         ecosystems, we provide the full spectrum of IT services for the \
                         forward-thinking enterprise."
                    }
                }
            }

            section { class: "services-grid-section",
                div { class: "card-grid three",
                    for (idx, service) in content::services().iter().enumerate() {
                        Reveal { key: "{service.id}", delay_ms: (idx as u32) * 100,
                            ServiceCard { service: *service }
                        }
                    }
                }
            }

            section { class: "process-band",
                div { class: "section-heading",
                    span { class: "eyebrow azure", "Methodology" }
                    h2 { class: "section-title", "Our Delivery Process" }
                    div { class: "heading-rule" }
                }

                div { class: "process-grid",
                    div { class: "process-line" }
                    for (idx, step) in PROCESS_STEPS.iter().enumerate() {
                        Reveal { key: "{step.title}", delay_ms: (idx as u32) * 150,
                            div { class: "process-card",
                                div { class: "process-icon", Icon { name: step.icon, size: 24 } }
                                h4 { class: "process-title", "{step.title}" }
                                p { class: "process-detail", "{step.detail}" }
                                div { class: "process-more",
                                    "Learn More "
                                    Icon { name: "ArrowRight", size: 12 }
                                }
                                div { class: "process-number", "0{idx + 1}" }
                                div { class: "process-accent" }
                            }
                        }
                    }
                }
            }
        }
    }
}

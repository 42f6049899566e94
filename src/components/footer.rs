//! Site footer: brand blurb, quick links, service deep links, contact info.

use chrono::Datelike;
use dioxus::prelude::*;
use josata_core::content;

use crate::app::Route;
use crate::components::{Icon, Logo};

const SOCIALS: &[(&str, &str)] = &[
    ("Linkedin", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
    ("Github", "https://github.com"),
    ("Facebook", "https://facebook.com"),
];

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div { class: "footer-brand",
                    Logo {}
                    p { class: "footer-blurb",
                        "Revolutionizing the way businesses operate through innovative IT \
                         consulting and bespoke digital solutions. Empowering your tomorrow, \
                         starting today."
                    }
                    div { class: "footer-socials",
                        for (name, url) in SOCIALS.iter().copied() {
                            a {
                                class: "footer-social",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "{name}",
                                Icon { name, size: 18 }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h4 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-list",
                        for item in content::NAV_ITEMS.iter().filter(|i| i.path != "/") {
                            li {
                                Link {
                                    to: Route::for_path(item.path, ""),
                                    class: "footer-link",
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h4 { class: "footer-heading", "Services" }
                    ul { class: "footer-list",
                        for link in content::FOOTER_SERVICE_LINKS {
                            li {
                                Link {
                                    to: Route::for_path(link.path, link.section),
                                    class: "footer-link",
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }

                div { class: "footer-column",
                    h4 { class: "footer-heading", "Get in Touch" }
                    ul { class: "footer-list contact",
                        for channel in content::CONTACT_CHANNELS {
                            li { class: "footer-contact-row",
                                span { class: "footer-contact-icon",
                                    Icon { name: channel.icon, size: 18 }
                                }
                                span { class: "footer-contact-value", "{channel.value}" }
                            }
                        }
                    }
                }
            }

            div { class: "footer-bar",
                p { class: "footer-copyright",
                    "\u{00a9} {year} Josata Technologies. All rights reserved."
                }
                div { class: "footer-policies",
                    for label in ["Privacy Policy", "Terms of Service", "Cookie Settings"] {
                        span { class: "footer-policy", "{label}" }
                    }
                }
            }
        }
    }
}

//! Stats band with eased count-up numbers.

use dioxus::prelude::*;
use josata_core::content::STATS;

/// Count-up duration, matching the production easing window.
const COUNT_MS: f64 = 1500.0;

#[component]
pub fn StatsBand() -> Element {
    rsx! {
        section { class: "stats-band",
            div { class: "stats-inner",
                div { class: "section-heading",
                    span { class: "eyebrow azure", "Performance Metrics" }
                    h2 { class: "section-title",
                        "Josata by the "
                        span { class: "gradient-text", "Numbers" }
                    }
                    div { class: "heading-rule" }
                }

                div { class: "stats-grid",
                    for (idx, stat) in STATS.iter().enumerate() {
                        div { key: "{idx}", class: "stat-cell",
                            div { class: "stat-value",
                                CountUp { end: stat.value, suffix: stat.suffix }
                            }
                            div { class: "stat-rule" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Counts from zero to `end` with an exponential ease-out, once per mount.
#[component]
fn CountUp(end: u32, suffix: &'static str) -> Element {
    let mut shown = use_signal(|| 0u32);

    use_effect(move || {
        spawn(async move {
            let started = std::time::Instant::now();
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(16)).await;
                let progress = (started.elapsed().as_millis() as f64 / COUNT_MS).min(1.0);
                if progress >= 1.0 {
                    shown.set(end);
                    break;
                }
                let eased = 1.0 - 2f64.powf(-10.0 * progress);
                shown.set((eased * f64::from(end)).floor() as u32);
            }
        });
    });

    rsx! {
        span { class: "count-up", "{shown}{suffix}" }
    }
}

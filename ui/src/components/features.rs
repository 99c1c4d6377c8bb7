use dioxus::prelude::*;

use crate::core::effects::reveal_transition;

// Reveal stagger continues after the three stat cards.
const FIRST_REVEAL: usize = 3;

#[component]
pub fn Features() -> Element {
    rsx! {
        section { id: "features", class: "features",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "features.title", "Key Features" }
                p { class: "section-subtitle", "data-i18n": "features.subtitle",
                    "Explore COVID-19 data like never before with powerful visualization tools"
                }
                div { class: "features-grid",
                    div { class: "feature-card reveal", style: reveal_transition(FIRST_REVEAL),
                        div { class: "feature-icon", "📊" }
                        h3 { "data-i18n": "features.f1.title", "Time Series Visualization" }
                        p { "data-i18n": "features.f1.text",
                            "Display COVID-19 data over time with interactive, high-performance charts that handle massive datasets."
                        }
                    }
                    div { class: "feature-card reveal", style: reveal_transition(FIRST_REVEAL + 1),
                        div { class: "feature-icon", "🌍" }
                        h3 { "data-i18n": "features.f2.title", "Multi-Country Comparison" }
                        p { "data-i18n": "features.f2.text",
                            "Compare pandemic trends across different countries and regions to understand global patterns."
                        }
                    }
                    div { class: "feature-card reveal", style: reveal_transition(FIRST_REVEAL + 2),
                        div { class: "feature-icon", "🔍" }
                        h3 { "data-i18n": "features.f3.title", "Zoom & Pan" }
                        p { "data-i18n": "features.f3.text",
                            "Focus on specific time periods for detailed analysis of waves, peaks, and outbreak patterns."
                        }
                    }
                    div { class: "feature-card reveal", style: reveal_transition(FIRST_REVEAL + 3),
                        div { class: "feature-icon", "📈" }
                        h3 { "data-i18n": "features.f4.title", "Multi-Metric Overlay" }
                        p { "data-i18n": "features.f4.text",
                            "Combine different metrics like cases, deaths, and positive rates in a single comprehensive view."
                        }
                    }
                    div { class: "feature-card reveal", style: reveal_transition(FIRST_REVEAL + 4),
                        div { class: "feature-icon", "🗺️" }
                        h3 { "data-i18n": "features.f5.title", "Regional Analysis" }
                        p { "data-i18n": "features.f5.text",
                            "Analyze data at continental or regional levels to understand geographic spread patterns."
                        }
                    }
                    div { class: "feature-card reveal", style: reveal_transition(FIRST_REVEAL + 5),
                        div { class: "feature-icon", "💻" }
                        h3 { "data-i18n": "features.f6.title", "Cross-Platform" }
                        p { "data-i18n": "features.f6.text",
                            "Available for Windows, macOS, and Linux. Built with Java 17 for maximum compatibility."
                        }
                    }
                }
            }
        }
    }
}

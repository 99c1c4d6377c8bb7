use dioxus::prelude::*;

use crate::core::effects::reveal_transition;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "about.title", "What is Software ECG?" }
                div { class: "about-content",
                    div { class: "about-text",
                        p { "data-i18n": "about.text1",
                            "Software ECG (EKG in German) is a powerful time series analysis tool developed by Johannes Weigend and the team at QAware GmbH. The name stands for \"Elektrokardiogramm\" – just like a medical ECG shows the heartbeat of a patient, Software ECG shows the \"heartbeat\" of your data."
                        }
                        p { "data-i18n": "about.text2",
                            "This COVID-19 Edition is specifically designed to visualize and analyze pandemic data, helping researchers, data scientists, and curious minds explore the global impact of COVID-19 through interactive visualizations."
                        }
                    }
                    div { class: "about-stats",
                        div { class: "stat-card reveal", style: reveal_transition(0),
                            span { class: "stat-value", "data-i18n": "about.stat1.value", "200+" }
                            span { class: "stat-label", "data-i18n": "about.stat1.label", "Countries" }
                        }
                        div { class: "stat-card reveal", style: reveal_transition(1),
                            span { class: "stat-value", "data-i18n": "about.stat2.value", "Billions" }
                            span { class: "stat-label", "data-i18n": "about.stat2.label", "Data Points" }
                        }
                        div { class: "stat-card reveal", style: reveal_transition(2),
                            span { class: "stat-value", "data-i18n": "about.stat3.value", "Real-time" }
                            span { class: "stat-label", "data-i18n": "about.stat3.label", "Analysis" }
                        }
                    }
                }
            }
        }
    }
}

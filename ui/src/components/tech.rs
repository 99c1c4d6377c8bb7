use dioxus::prelude::*;

use crate::core::effects::reveal_transition;

const FIRST_REVEAL: usize = 12;

/// Technologies the desktop application is built on. Names are not translated.
pub const STACK: [(&str, &str); 4] = [
    ("☕", "Java 17"),
    ("🖼️", "JavaFX"),
    ("🔎", "Apache Solr"),
    ("🧩", "CDI"),
];

#[component]
pub fn Tech() -> Element {
    rsx! {
        section { id: "tech", class: "tech",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "tech.title", "Built With" }
                div { class: "tech-grid",
                    for (index, (icon, name)) in STACK.iter().enumerate() {
                        div {
                            key: "{name}",
                            class: "tech-item reveal",
                            style: reveal_transition(FIRST_REVEAL + index),
                            span { class: "tech-icon", "{icon}" }
                            span { class: "tech-name", "{name}" }
                        }
                    }
                }
            }
        }
    }
}

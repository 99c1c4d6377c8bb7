use dioxus::prelude::*;

use super::landing::PROJECT_URL;

#[component]
pub fn Cta() -> Element {
    rsx! {
        section { id: "get-started", class: "cta",
            div { class: "container",
                h2 { "data-i18n": "cta.title", "Ready to Explore?" }
                p { "data-i18n": "cta.text",
                    "Download Software ECG COVID-19 Edition and start analyzing pandemic data today."
                }
                a {
                    class: "btn btn-primary btn-large",
                    href: PROJECT_URL,
                    target: "_blank",
                    rel: "noopener",
                    span { "data-i18n": "cta.button", "Get Started on GitHub" }
                }
            }
        }
    }
}

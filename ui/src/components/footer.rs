use dioxus::prelude::*;

use super::landing::{PROJECT_URL, WEBSITE_URL};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-content",
                    div { class: "footer-logo",
                        span { class: "logo-icon", aria_hidden: "true", "📈" }
                        span { class: "logo-text", "Software ECG" }
                    }
                    p { class: "footer-text", "data-i18n": "footer.text",
                        "Developed by Johannes Weigend & QAware GmbH"
                    }
                    div { class: "footer-links",
                        a { href: PROJECT_URL, target: "_blank", rel: "noopener", "GitHub" }
                        a { href: WEBSITE_URL, target: "_blank", rel: "noopener",
                            span { "data-i18n": "footer.website", "Website" }
                        }
                    }
                    p { class: "footer-license", "data-i18n": "footer.license",
                        "Open Source under GPLv3 License."
                    }
                }
            }
        }
    }
}

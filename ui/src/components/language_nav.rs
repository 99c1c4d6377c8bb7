use dioxus::prelude::*;

use super::landing::LanguageControl;
use crate::core::effects;
use crate::i18n::LanguageCode;

/// Selector of the fixed top navigation, shaded once the page scrolls.
pub const NAV_SELECTOR: &str = ".language-nav";

/// One button per bundled language, in display order.
static LANGUAGES: [(LanguageCode, &str); 3] = [
    (LanguageCode::EN, "EN"),
    (LanguageCode::DE, "DE"),
    (LanguageCode::PT, "PT"),
];

/// Fixed navigation with the brand and the language buttons.
///
/// Buttons render without the `active` class; the switcher marks the active
/// one once it has restored the persisted language.
#[component]
pub fn LanguageNav() -> Element {
    let mut language = use_context::<LanguageControl>();

    rsx! {
        nav { class: "language-nav",
            div { class: "nav-container",
                a {
                    class: "logo",
                    href: "#top",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        effects::scroll_to("top");
                    },
                    span { class: "logo-icon", aria_hidden: "true", "📈" }
                    span { class: "logo-text", "Software ECG" }
                }
                div { class: "lang-switcher",
                    for (code, label) in LANGUAGES.iter() {
                        button {
                            key: "{code}",
                            class: "lang-btn",
                            r#type: "button",
                            "data-lang": "{code}",
                            title: "{label}",
                            onclick: move |_| language.activate(code),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

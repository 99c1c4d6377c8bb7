use dioxus::prelude::*;

use super::landing::LanguageControl;
use super::lightbox::LightboxState;
use crate::core::effects::reveal_transition;
use crate::i18n::keys;

// Reveal stagger continues after the stat and feature cards.
const FIRST_REVEAL: usize = 9;

pub const NEW_CASES_SRC: &str = "/screenshots/new-cases.png";
pub const REGIONAL_SRC: &str = "/screenshots/regional-comparison.png";
pub const MULTI_METRIC_SRC: &str = "/screenshots/multi-metric.png";

/// Screenshot gallery; clicking a card opens it in the [`Lightbox`](super::Lightbox).
#[component]
pub fn Screenshots() -> Element {
    let language = use_context::<LanguageControl>();
    let mut lightbox = use_context::<Signal<LightboxState>>();

    // The caption is read at click time so it follows the active language.
    let mut open = move |src: &'static str, key: &'static str, fallback: &'static str| {
        lightbox.write().open(src, language.translate(key, fallback));
    };

    rsx! {
        section { id: "screenshots", class: "screenshots",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "screenshots.title", "See It In Action" }
                p { class: "section-subtitle", "data-i18n": "screenshots.subtitle",
                    "Explore some examples of what you can do with Software ECG"
                }
                div { class: "screenshots-grid",
                    div {
                        class: "screenshot-card reveal",
                        style: reveal_transition(FIRST_REVEAL),
                        tabindex: "0",
                        onclick: move |_| open(NEW_CASES_SRC, keys::SCREENSHOTS_S1, "New Cases Analysis"),
                        img { src: NEW_CASES_SRC, alt: "New Cases Analysis", loading: "lazy" }
                        div { class: "screenshot-overlay",
                            span { "data-i18n": "screenshots.s1", "New Cases Analysis" }
                        }
                    }
                    div {
                        class: "screenshot-card reveal",
                        style: reveal_transition(FIRST_REVEAL + 1),
                        tabindex: "0",
                        onclick: move |_| open(REGIONAL_SRC, keys::SCREENSHOTS_S2, "Regional Comparison"),
                        img { src: REGIONAL_SRC, alt: "Regional Comparison", loading: "lazy" }
                        div { class: "screenshot-overlay",
                            span { "data-i18n": "screenshots.s2", "Regional Comparison" }
                        }
                    }
                    div {
                        class: "screenshot-card reveal",
                        style: reveal_transition(FIRST_REVEAL + 2),
                        tabindex: "0",
                        onclick: move |_| open(MULTI_METRIC_SRC, keys::SCREENSHOTS_S3, "Multi-Metric View"),
                        img { src: MULTI_METRIC_SRC, alt: "Multi-Metric View", loading: "lazy" }
                        div { class: "screenshot-overlay",
                            span { "data-i18n": "screenshots.s3", "Multi-Metric View" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::landing::PROJECT_URL;
use crate::core::effects::{self, Particle, ParticleField};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "top", class: "hero",
            Particles {}
            div { class: "hero-content",
                span { class: "hero-badge", "data-i18n": "hero.badge", "COVID-19 Edition" }
                h1 { class: "hero-title", "data-i18n": "hero.title", "Software ECG" }
                p { class: "hero-subtitle", "data-i18n": "hero.subtitle",
                    "A powerful time series analysis tool for visualizing and exploring COVID-19 pandemic data"
                }
                div { class: "hero-buttons",
                    a {
                        class: "btn btn-primary",
                        href: PROJECT_URL,
                        target: "_blank",
                        rel: "noopener",
                        span { "data-i18n": "hero.github", "View on GitHub" }
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "#about",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            effects::scroll_to("about");
                        },
                        span { "data-i18n": "hero.learnMore", "Learn More" }
                    }
                }
            }
        }
    }
}

/// Decorative dots floating up behind the hero text.
///
/// Kept in its own component so the particle ticks re-render only this subtree.
#[component]
fn Particles() -> Element {
    #[allow(unused_mut)]
    let mut field = use_signal(ParticleField::default);

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        let mut rng = rand::thread_rng();
        loop {
            gloo_timers::future::TimeoutFuture::new(effects::PARTICLE_INTERVAL_MS).await;
            field.write().step(&mut rng);
        }
    });

    let particles: Vec<Particle> = field.read().particles().cloned().collect();

    rsx! {
        div { class: "particles", aria_hidden: "true",
            for particle in particles {
                div { key: "{particle.id}", class: "particle", style: particle.style() }
            }
        }
    }
}

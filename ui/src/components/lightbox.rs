use dioxus::prelude::*;

use crate::core::effects;

/// Full-size screenshot overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    open: bool,
    src: String,
    caption: String,
}

impl LightboxState {
    pub fn open(&mut self, src: impl Into<String>, caption: impl Into<String>) {
        self.src = src.into();
        self.caption = caption.into();
        self.open = true;
    }

    /// Hide the overlay. The last image stays loaded so reopening is instant.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Keyboard handling; returns whether the key closed the overlay.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == effects::ESCAPE_KEY {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

#[component]
pub fn Lightbox() -> Element {
    let mut state = use_context::<Signal<LightboxState>>();

    use_effect(move || effects::lock_body_scroll(state.read().is_open()));

    let current = state();
    let class = if current.is_open() { "lightbox active" } else { "lightbox" };
    let src = current.src();
    let caption = current.caption();

    rsx! {
        div {
            id: "lightbox",
            class: "{class}",
            // only clicks on the backdrop itself reach this handler
            onclick: move |_| state.write().close(),
            span {
                class: "lightbox-close",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    state.write().close();
                },
                "×"
            }
            img {
                id: "lightbox-img",
                src: "{src}",
                alt: "{caption}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
            }
            div {
                id: "lightbox-caption",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                "{caption}"
            }
        }
    }
}

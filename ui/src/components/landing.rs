use dioxus::prelude::*;
use tracing::debug;

use super::{About, Cta, Features, Footer, Hero, LanguageNav, Lightbox, LightboxState, Screenshots, Tech};
use crate::core::storage::{LanguagePreference, PlatformStorage};
use crate::i18n::{LanguageCode, LanguageSwitcher, SwitcherConfig};

#[cfg(target_arch = "wasm32")]
use crate::core::{effects, storage};
#[cfg(target_arch = "wasm32")]
use crate::i18n::BUNDLED;
#[cfg(target_arch = "wasm32")]
use crate::view::DomView;

/// Project page linked from the hero, CTA and footer.
pub const PROJECT_URL: &str = "https://github.com/qaware";
/// Company website linked from the footer.
pub const WEBSITE_URL: &str = "https://www.qaware.de";

pub type PageSwitcher = LanguageSwitcher<'static, LanguagePreference<PlatformStorage>>;

/// Handle to the page's language switcher, provided through context.
///
/// The switcher only exists once the page is mounted in a browser; until then
/// (and on native builds) activations are ignored and the English markup stays.
#[derive(Clone, Copy)]
pub struct LanguageControl {
    switcher: Signal<Option<PageSwitcher>>,
}

impl LanguageControl {
    pub fn new(switcher: Signal<Option<PageSwitcher>>) -> Self {
        Self { switcher }
    }

    /// Restore the persisted language against the live document.
    pub fn mount(&mut self, config: SwitcherConfig) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(mut view) = DomView::current() else {
                tracing::warn!("[i18n] no document to translate");
                return;
            };
            let switcher =
                LanguageSwitcher::with_storage(&BUNDLED, storage::platform_storage(), &mut view, config);
            self.switcher.set(Some(switcher));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            debug!(lang = %config.default_language, "[i18n] no live document; keeping rendered text");
        }
    }

    /// Click handler of a language button.
    pub fn activate(&mut self, lang: &LanguageCode) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(mut view) = DomView::current() else {
                return;
            };
            if let Some(switcher) = self.switcher.write().as_mut() {
                switcher.activate(&mut view, lang);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            debug!(%lang, "[i18n] no live document; language switch skipped");
        }
    }

    /// Text of `key` in the active language, `fallback` before mount.
    pub fn translate(&self, key: &str, fallback: &'static str) -> &'static str {
        self.switcher
            .peek()
            .as_ref()
            .and_then(|s| s.translate(key))
            .unwrap_or(fallback)
    }
}

#[cfg(debug_assertions)]
fn log_page_render() {
    // Lightweight render trace; the page should render once per load.
    debug!("[i18n] LandingPage render");
}

#[component]
pub fn LandingPage() -> Element {
    let switcher = use_signal(|| None);
    let mut language = use_context_provider(|| LanguageControl::new(switcher));
    let mut lightbox = use_context_provider(|| Signal::new(LightboxState::default()));

    #[cfg(debug_assertions)]
    {
        log_page_render();
    }

    use_effect(move || {
        language.mount(SwitcherConfig::default());

        #[cfg(target_arch = "wasm32")]
        {
            effects::observe_reveals();
            effects::shade_on_scroll(super::language_nav::NAV_SELECTOR);
        }
    });

    // Escape closes the lightbox wherever focus is, including <body>.
    use_future(move || async move {
        let mut presses = document::eval(crate::core::effects::ESCAPE_LISTENER);
        while let Ok(key) = presses.recv::<String>().await {
            lightbox.write().on_key(&key);
        }
    });

    rsx! {
        div { class: "landing",
            LanguageNav {}
            Hero {}
            About {}
            Features {}
            Screenshots {}
            Tech {}
            Cta {}
            Footer {}
            Lightbox {}
        }
    }
}

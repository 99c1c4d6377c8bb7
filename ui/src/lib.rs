//! Shared UI crate for the Software ECG landing page: translation catalog,
//! preference storage, view adapters and the page components.

pub mod core;
pub mod i18n;
pub mod view;
pub mod views;

pub mod components {
    // Page shell, language handle and external links (components/landing.rs)
    pub mod landing;
    pub use landing::{LandingPage, LanguageControl, PageSwitcher};

    // Fixed navigation with the language buttons (components/language_nav.rs)
    pub mod language_nav;
    pub use language_nav::LanguageNav;

    pub mod lightbox;
    pub use lightbox::{Lightbox, LightboxState};

    // Page sections, top to bottom
    mod about;
    mod cta;
    mod features;
    mod footer;
    mod hero;
    mod screenshots;
    mod tech;
    pub use about::About;
    pub use cta::Cta;
    pub use features::Features;
    pub use footer::Footer;
    pub use hero::Hero;
    pub use screenshots::Screenshots;
    pub use tech::Tech;
}

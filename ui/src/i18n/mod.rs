//! Internationalization (i18n) for the landing page.
//!
//! This module wires together:
//! - `fluent` (message formatting of the bundled `.ftl` files)
//! - `rust-embed` (compile-time embedding of the locale folders)
//! - `unic-langid` (language tag validation)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/landing.ftl   (fallback/reference)
//!   de/landing.ftl
//!   pt/landing.ftl
//! ```
//!
//! Markup opts into translation with `data-i18n="<key>"`; language buttons
//! carry `data-lang="<code>"`. Keys use dots (`hero.title`); the matching
//! Fluent message ID uses dashes (`hero-title`).
//!
//! Usage (once the page is mounted):
//! ```ignore
//! let storage = ui::core::storage::platform_storage();
//! let mut view = DomView::current().unwrap();
//! let mut switcher =
//!     LanguageSwitcher::with_storage(&BUNDLED, storage, &mut view, SwitcherConfig::default());
//! // on click of a language button:
//! switcher.activate(&mut view, &LanguageCode::DE);
//! ```
//!
//! To add a new locale:
//! 1. Copy `en/landing.ftl` to `i18n/<lang>/landing.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add a button with `data-lang="<lang>"` to the language nav.
//! 4. Run tests to ensure completeness.
//!
//! Failure policy: unknown languages are ignored, missing keys keep the text
//! already on the page, missing elements are skipped and storage problems
//! only cost the remembered preference.

mod applier;
mod catalog;
pub mod keys;
mod language;
mod switcher;

pub use applier::{ApplyReport, BrandOverride, LanguageApplier};
pub use catalog::{Catalog, CatalogBuilder, CatalogError, LanguageTable, BUNDLED, FTL_FILENAME};
pub use language::{LanguageCode, LanguageCodeError};
pub use switcher::{LanguageSwitcher, SwitcherConfig};

//! Pushes one language's strings into a view.

use tracing::debug;

use super::catalog::Catalog;
use super::language::LanguageCode;
use crate::view::ViewAdapter;

/// Product name shown in the branded headings.
///
/// The name differs per language but the headings are not catalog-driven; the
/// override pass runs after the catalog pass and always wins for its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandOverride {
    /// Selectors of the branded elements; the first match of each is rewritten.
    pub targets: &'static [&'static str],
    /// Language-specific names.
    pub names: &'static [(&'static str, &'static str)],
    /// Name for every other language.
    pub fallback: &'static str,
}

impl BrandOverride {
    pub const fn software_ecg() -> Self {
        Self {
            targets: &[".hero-title", ".logo-text", ".footer-logo .logo-text"],
            names: &[("de", "Software EKG")],
            fallback: "Software ECG",
        }
    }

    pub fn name_for(&self, lang: &LanguageCode) -> &'static str {
        self.names
            .iter()
            .find(|(code, _)| lang.as_str() == *code)
            .map(|(_, name)| *name)
            .unwrap_or(self.fallback)
    }
}

impl Default for BrandOverride {
    fn default() -> Self {
        Self::software_ecg()
    }
}

/// What a successful [`LanguageApplier::apply`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub language: LanguageCode,
    /// Marked elements whose text was replaced.
    pub updated: usize,
    /// Keys found in the view but not in the language table (text left as is).
    pub missing: Vec<String>,
    /// Brand targets that existed and were rewritten.
    pub branded: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageApplier<'c> {
    catalog: &'c Catalog,
    brand: BrandOverride,
}

impl<'c> LanguageApplier<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            brand: BrandOverride::default(),
        }
    }

    pub fn with_brand(mut self, brand: BrandOverride) -> Self {
        self.brand = brand;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Show `lang` in `view`.
    ///
    /// Returns `None` and leaves the view untouched when the catalog has no
    /// entry for `lang`. Marked elements whose key is missing keep their
    /// current text. Re-applying the same language is a no-op visually.
    pub fn apply<V: ViewAdapter>(&self, view: &mut V, lang: &LanguageCode) -> Option<ApplyReport> {
        let Some(table) = self.catalog.language(lang) else {
            debug!(%lang, "[i18n] no catalog entry, view left untouched");
            return None;
        };

        view.set_document_lang(lang.as_str());

        let mut report = ApplyReport {
            language: lang.clone(),
            updated: 0,
            missing: Vec::new(),
            branded: 0,
        };

        for (node, key) in view.translatable() {
            match table.get(&key) {
                Some(text) => {
                    view.set_text(&node, text);
                    report.updated += 1;
                }
                None => report.missing.push(key),
            }
        }

        let brand = self.brand.name_for(lang);
        for selector in self.brand.targets {
            if let Some(node) = view.select(selector) {
                view.set_text(&node, brand);
                report.branded += 1;
            }
        }

        if !report.missing.is_empty() {
            debug!(%lang, missing = ?report.missing, "[i18n] keys without translation kept their text");
        }
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::view::MemoryView;

    fn catalog() -> Catalog {
        Catalog::builder()
            .language(
                LanguageCode::EN,
                [("hero.title", "Software ECG"), ("cta.title", "Ready to Explore?")],
            )
            .language(
                LanguageCode::DE,
                [("hero.title", "Software EKG"), ("cta.title", "Bereit zum Erkunden?")],
            )
            .build()
    }

    fn view() -> MemoryView {
        let mut view = MemoryView::new();
        let nav = view.insert(None, "nav", "").unwrap();
        view.insert(Some(nav), "span.logo-text", "Software ECG").unwrap();
        view.insert(None, r#"h1.hero-title[data-i18n="hero.title"]"#, "Software ECG")
            .unwrap();
        view.insert(None, r#"h2[data-i18n="cta.title"]"#, "Ready to Explore?")
            .unwrap();
        view
    }

    #[test]
    fn brand_name_depends_on_language_only() {
        let brand = BrandOverride::software_ecg();
        assert_eq!(brand.name_for(&LanguageCode::DE), "Software EKG");
        assert_eq!(brand.name_for(&LanguageCode::EN), "Software ECG");
        assert_eq!(brand.name_for(&LanguageCode::PT), "Software ECG");
    }

    #[test]
    fn apply_updates_marked_text_and_document_lang() {
        let catalog = catalog();
        let mut view = view();
        let report = LanguageApplier::new(&catalog)
            .apply(&mut view, &LanguageCode::DE)
            .unwrap();

        assert_eq!(view.document_lang().as_deref(), Some("de"));
        assert_eq!(view.text_of("h2").as_deref(), Some("Bereit zum Erkunden?"));
        assert_eq!(view.text_of(".hero-title").as_deref(), Some("Software EKG"));
        assert_eq!(view.text_of(".logo-text").as_deref(), Some("Software EKG"));
        assert_eq!(report.updated, 2);
        // `.footer-logo .logo-text` is absent from this view
        assert_eq!(report.branded, 2);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn brand_override_wins_over_catalog() {
        let catalog = Catalog::builder()
            .language(LanguageCode::DE, [("hero.title", "Irgendwas")])
            .build();
        let mut view = view();
        LanguageApplier::new(&catalog).apply(&mut view, &LanguageCode::DE);
        assert_eq!(view.text_of(".hero-title").as_deref(), Some("Software EKG"));
    }

    #[test]
    fn unsupported_language_is_a_no_op() {
        let catalog = catalog();
        let mut view = view();
        view.set_document_lang("en");
        let before = view.clone();

        let xx: LanguageCode = "xx".parse().unwrap();
        assert!(LanguageApplier::new(&catalog).apply(&mut view, &xx).is_none());

        assert_eq!(view.document_lang(), before.document_lang());
        assert_eq!(view.text_of("h2"), before.text_of("h2"));
        assert_eq!(view.text_of(".logo-text"), before.text_of(".logo-text"));
    }

    #[test]
    fn missing_keys_keep_previous_text() {
        let catalog = Catalog::builder()
            .language(LanguageCode::PT, [("hero.title", "Software ECG")])
            .build();
        let mut view = view();
        let report = LanguageApplier::new(&catalog)
            .apply(&mut view, &LanguageCode::PT)
            .unwrap();
        assert_eq!(view.text_of("h2").as_deref(), Some("Ready to Explore?"));
        assert_eq!(report.missing, vec!["cta.title".to_string()]);
    }

    #[test]
    fn apply_is_idempotent() {
        let catalog = catalog();
        let applier = LanguageApplier::new(&catalog);
        let mut once = view();
        applier.apply(&mut once, &LanguageCode::DE);
        let mut twice = view();
        applier.apply(&mut twice, &LanguageCode::DE);
        applier.apply(&mut twice, &LanguageCode::DE);
        for selector in ["h1", "h2", ".logo-text"] {
            assert_eq!(once.text_of(selector), twice.text_of(selector));
        }
        assert_eq!(once.document_lang(), twice.document_lang());
    }
}

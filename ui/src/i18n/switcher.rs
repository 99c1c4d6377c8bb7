//! Language selection: owns the active language and keeps controls,
//! page text and the persisted preference in step.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::applier::{ApplyReport, BrandOverride, LanguageApplier};
use super::catalog::Catalog;
use super::language::LanguageCode;
use crate::core::storage::{KeyValueStorage, LanguagePreference, PreferenceStore, PREFERENCE_KEY};
use crate::view::{ViewAdapter, LANG_ATTR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Used when nothing usable was persisted. Falls back to
    /// [`LanguageCode::DEFAULT`] if the catalog lacks it.
    pub default_language: LanguageCode,
    /// Storage key of the persisted preference, see [`LanguageSwitcher::with_storage`].
    pub storage_key: String,
    /// Class marking the control of the active language.
    pub active_class: String,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::DEFAULT,
            storage_key: PREFERENCE_KEY.to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// Single owner of the page's active language.
///
/// Every operation runs apply → mark controls → persist to completion before
/// returning, so exactly one control is active between calls (provided each
/// language has one control).
#[derive(Debug)]
pub struct LanguageSwitcher<'c, P> {
    applier: LanguageApplier<'c>,
    store: P,
    active: LanguageCode,
    config: SwitcherConfig,
}

/// The configured default if the catalog has it, else [`LanguageCode::DEFAULT`],
/// else the catalog's first language.
fn default_for(catalog: &Catalog, configured: &LanguageCode) -> LanguageCode {
    if catalog.supports(configured) {
        return configured.clone();
    }
    let fallback = if catalog.supports(&LanguageCode::DEFAULT) {
        LanguageCode::DEFAULT
    } else {
        match catalog.languages().next() {
            Some(first) => first.clone(),
            // nothing can be shown; keep the configured code
            None => return configured.clone(),
        }
    };
    warn!(%configured, %fallback, "[i18n] configured default not in catalog");
    fallback
}

impl<'c, S: KeyValueStorage> LanguageSwitcher<'c, LanguagePreference<S>> {
    /// [`init`](Self::init) with the preference kept in `storage` under
    /// `config.storage_key`, restricted to the catalog's languages.
    pub fn with_storage<V: ViewAdapter>(
        catalog: &'c Catalog,
        storage: S,
        view: &mut V,
        config: SwitcherConfig,
    ) -> Self {
        let store = LanguagePreference::with_key(storage, config.storage_key.clone())
            .restricted_to(catalog.languages().cloned());
        Self::init(catalog, store, view, config)
    }
}

impl<'c, P: PreferenceStore> LanguageSwitcher<'c, P> {
    /// Restore the persisted language (or the default) and show it.
    pub fn init<V: ViewAdapter>(
        catalog: &'c Catalog,
        store: P,
        view: &mut V,
        config: SwitcherConfig,
    ) -> Self {
        Self::init_with_brand(catalog, BrandOverride::default(), store, view, config)
    }

    pub fn init_with_brand<V: ViewAdapter>(
        catalog: &'c Catalog,
        brand: BrandOverride,
        store: P,
        view: &mut V,
        config: SwitcherConfig,
    ) -> Self {
        let initial = match store.load() {
            Some(saved) if catalog.supports(&saved) => saved,
            Some(saved) => {
                debug!(%saved, "[i18n] persisted language not in catalog, using default");
                default_for(catalog, &config.default_language)
            }
            None => default_for(catalog, &config.default_language),
        };

        let switcher = Self {
            applier: LanguageApplier::new(catalog).with_brand(brand),
            store,
            active: initial,
            config,
        };
        switcher.applier.apply(view, &switcher.active);
        switcher.mark_active(view);
        info!(lang = %switcher.active, "[i18n] initial language");
        switcher
    }

    /// Switch to `lang`. Unsupported codes change nothing and return `None`.
    pub fn activate<V: ViewAdapter>(
        &mut self,
        view: &mut V,
        lang: &LanguageCode,
    ) -> Option<ApplyReport> {
        let report = self.applier.apply(view, lang)?;
        self.active = lang.clone();
        self.mark_active(view);
        self.store.save(lang);
        debug!(%lang, updated = report.updated, "[i18n] language switched");
        Some(report)
    }

    /// Activation handler of a language-selection control: switches to the
    /// language named by its `data-lang` attribute.
    pub fn activate_control<V: ViewAdapter>(
        &mut self,
        view: &mut V,
        control: &V::Node,
    ) -> Option<ApplyReport> {
        let raw = view.attribute(control, LANG_ATTR)?;
        match raw.parse::<LanguageCode>() {
            Ok(lang) => self.activate(view, &lang),
            Err(err) => {
                debug!("[i18n] ignoring control: {err}");
                None
            }
        }
    }

    pub fn active(&self) -> &LanguageCode {
        &self.active
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.applier.catalog()
    }

    /// Text of `key` in the active language.
    pub fn translate(&self, key: &str) -> Option<&'c str> {
        self.catalog().lookup(&self.active, key)
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn into_store(self) -> P {
        self.store
    }

    fn mark_active<V: ViewAdapter>(&self, view: &mut V) {
        for (control, code) in view.language_controls() {
            let on = self.active == code.as_str();
            view.set_class(&control, &self.config.active_class, on);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::storage::{KeyValueStorage, LanguagePreference, MemoryStorage};
    use crate::view::MemoryView;

    fn catalog() -> Catalog {
        Catalog::builder()
            .language(LanguageCode::EN, [("cta.title", "Ready to Explore?")])
            .language(LanguageCode::DE, [("cta.title", "Bereit zum Erkunden?")])
            .language(LanguageCode::PT, [("cta.title", "Pronto para Explorar?")])
            .build()
    }

    fn view() -> MemoryView {
        let mut view = MemoryView::new();
        let nav = view.insert(None, "nav", "").unwrap();
        for code in ["en", "de", "pt"] {
            view.insert(
                Some(nav),
                &format!(r#"button.lang-btn[data-lang="{code}"]"#),
                &code.to_uppercase(),
            )
            .unwrap();
        }
        view.insert(None, r#"h2[data-i18n="cta.title"]"#, "Ready to Explore?")
            .unwrap();
        view
    }

    fn active_codes(view: &MemoryView) -> Vec<String> {
        view.language_controls()
            .into_iter()
            .filter(|(node, _)| view.has_class(node, "active"))
            .map(|(_, code)| code)
            .collect()
    }

    #[test]
    fn init_without_preference_uses_default() {
        let catalog = catalog();
        let mut view = view();
        let switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            SwitcherConfig::default(),
        );
        assert_eq!(switcher.active(), &LanguageCode::EN);
        assert_eq!(view.document_lang().as_deref(), Some("en"));
        assert_eq!(active_codes(&view), vec!["en".to_string()]);
    }

    #[test]
    fn init_restores_supported_preference() {
        let catalog = catalog();
        let mut view = view();
        let storage = MemoryStorage::new().with_entry(PREFERENCE_KEY, "pt");
        let switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(storage),
            &mut view,
            SwitcherConfig::default(),
        );
        assert_eq!(switcher.active(), &LanguageCode::PT);
        assert_eq!(view.text_of("h2").as_deref(), Some("Pronto para Explorar?"));
        assert_eq!(active_codes(&view), vec!["pt".to_string()]);
    }

    #[test]
    fn init_ignores_preference_outside_catalog() {
        let catalog = catalog();
        let mut view = view();
        let storage = MemoryStorage::new().with_entry(PREFERENCE_KEY, "xx");
        let switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(storage),
            &mut view,
            SwitcherConfig::default(),
        );
        assert_eq!(switcher.active(), &LanguageCode::EN);
    }

    #[test]
    fn activation_keeps_exactly_one_control_active() {
        let catalog = catalog();
        let mut view = view();
        let mut switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            SwitcherConfig::default(),
        );
        for code in ["de", "pt", "pt", "en", "de"] {
            let control = view.select(&format!(r#"[data-lang="{code}"]"#)).unwrap();
            assert!(switcher.activate_control(&mut view, &control).is_some());
            assert_eq!(active_codes(&view), vec![code.to_string()]);
            assert_eq!(switcher.active(), &code);
        }
    }

    #[test]
    fn activation_persists_choice() {
        let catalog = catalog();
        let mut view = view();
        let mut switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            SwitcherConfig::default(),
        );
        switcher.activate(&mut view, &LanguageCode::DE);
        let stored = switcher.store().storage().get(PREFERENCE_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some("de"));
        assert_eq!(switcher.translate("cta.title"), Some("Bereit zum Erkunden?"));
    }

    #[test]
    fn unsupported_activation_changes_nothing() {
        let catalog = catalog();
        let mut view = view();
        let mut switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            SwitcherConfig::default(),
        );
        switcher.activate(&mut view, &LanguageCode::DE);

        let xx: LanguageCode = "xx".parse().unwrap();
        assert!(switcher.activate(&mut view, &xx).is_none());
        assert_eq!(switcher.active(), &LanguageCode::DE);
        assert_eq!(active_codes(&view), vec!["de".to_string()]);
        assert_eq!(view.document_lang().as_deref(), Some("de"));
        let stored = switcher.store().storage().get(PREFERENCE_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some("de"));
    }

    #[test]
    fn control_with_malformed_code_is_ignored() {
        let catalog = catalog();
        let mut view = view();
        let bogus = view
            .insert(None, r#"button.lang-btn[data-lang="no good"]"#, "??")
            .unwrap();
        let mut switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            SwitcherConfig::default(),
        );
        assert!(switcher.activate_control(&mut view, &bogus).is_none());
        assert_eq!(switcher.active(), &LanguageCode::EN);
    }

    #[test]
    fn unsupported_configured_default_falls_back_to_english() {
        let catalog = Catalog::builder()
            .language(LanguageCode::EN, [("cta.title", "Ready to Explore?")])
            .language(LanguageCode::DE, [("cta.title", "Bereit zum Erkunden?")])
            .build();
        let mut view = view();
        let config = SwitcherConfig {
            default_language: "xx".parse().unwrap(),
            ..SwitcherConfig::default()
        };
        let switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            config,
        );
        assert_eq!(switcher.active(), &LanguageCode::EN);
        assert_eq!(active_codes(&view), vec!["en".to_string()]);
        assert_eq!(view.document_lang().as_deref(), Some("en"));
    }

    #[test]
    fn default_without_english_uses_first_catalog_language() {
        let catalog = Catalog::builder()
            .language(LanguageCode::PT, [("cta.title", "Pronto para Explorar?")])
            .language(LanguageCode::DE, [("cta.title", "Bereit zum Erkunden?")])
            .build();
        let mut view = view();
        let switcher = LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            SwitcherConfig::default(),
        );
        assert_eq!(switcher.active(), &LanguageCode::DE);
        assert_eq!(active_codes(&view), vec!["de".to_string()]);
    }

    #[test]
    fn storage_key_from_config_is_used() {
        let catalog = catalog();
        let mut view = view();
        let config = SwitcherConfig {
            storage_key: "lang".to_string(),
            ..SwitcherConfig::default()
        };
        let storage = MemoryStorage::new()
            .with_entry("lang", "pt")
            .with_entry(PREFERENCE_KEY, "de");
        let mut switcher = LanguageSwitcher::with_storage(&catalog, storage, &mut view, config);
        assert_eq!(switcher.active(), &LanguageCode::PT);

        switcher.activate(&mut view, &LanguageCode::EN);
        assert_eq!(switcher.store().key(), "lang");
        let storage = switcher.into_store().into_inner();
        assert_eq!(storage.get("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(storage.get(PREFERENCE_KEY).unwrap().as_deref(), Some("de"));
    }

    #[test]
    fn config_overrides_default_and_class() {
        let catalog = catalog();
        let mut view = view();
        let config: SwitcherConfig =
            serde_json::from_str(r#"{"default_language":"de","active_class":"is-current"}"#)
                .unwrap();
        assert_eq!(config.storage_key, PREFERENCE_KEY);
        LanguageSwitcher::init(
            &catalog,
            LanguagePreference::new(MemoryStorage::new()),
            &mut view,
            config,
        );
        let de = view.select(r#"[data-lang="de"]"#).unwrap();
        assert!(view.has_class(&de, "is-current"));
        assert!(!view.has_class(&de, "active"));
    }
}

//! Static translation catalog: language code → translation key → text.

use std::collections::{BTreeMap, HashMap};

use fluent::{FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use tracing::{error, warn};
use unic_langid::LanguageIdentifier;

use super::keys;
use super::language::{LanguageCode, LanguageCodeError};

/// File name of the Fluent resource inside every locale folder.
pub const FTL_FILENAME: &str = "landing.ftl";

/// Embed all locale folders under `i18n/` (`i18n/<lang>/landing.ftl`).
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Catalog built from the embedded locale folders, shared by the whole page.
pub static BUNDLED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::bundled().unwrap_or_else(|err| {
        error!("[i18n] bundled catalog unusable ({err}); page text stays as rendered");
        Catalog::default()
    })
});

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("locale folder `{path}` is not a language code: {source}")]
    Language {
        path: String,
        source: LanguageCodeError,
    },

    #[error("`{path}` is not valid UTF-8")]
    Encoding { path: String },

    #[error("`{path}` failed to parse: {message}")]
    Fluent { path: String, message: String },
}

/// Flat key → text table for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    entries: HashMap<String, String>,
}

impl LanguageTable {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Immutable after construction; share it by reference.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: BTreeMap<LanguageCode, LanguageTable>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build the catalog from the embedded `.ftl` files.
    ///
    /// Only the keys in [`keys::ALL`] are extracted; messages the page does not
    /// render are ignored.
    pub fn bundled() -> Result<Self, CatalogError> {
        let mut builder = Self::builder();
        for path in Localizations::iter() {
            let Some((folder, file)) = path.split_once('/') else {
                continue;
            };
            if file != FTL_FILENAME {
                continue;
            }
            let lang: LanguageCode = folder.parse().map_err(|source| CatalogError::Language {
                path: path.to_string(),
                source,
            })?;
            let Some(asset) = Localizations::get(&path) else {
                continue;
            };
            let source = std::str::from_utf8(&asset.data).map_err(|_| CatalogError::Encoding {
                path: path.to_string(),
            })?;
            let table = parse_ftl(&lang, source, &keys::ALL).map_err(|message| {
                CatalogError::Fluent {
                    path: path.to_string(),
                    message,
                }
            })?;
            builder = builder.language(lang, table);
        }
        Ok(builder.build())
    }

    /// Localized text for `key`, or `None` when the language or the key is unknown.
    pub fn lookup(&self, lang: &LanguageCode, key: &str) -> Option<&str> {
        self.languages.get(lang)?.get(key)
    }

    pub fn language(&self, lang: &LanguageCode) -> Option<&LanguageTable> {
        self.languages.get(lang)
    }

    pub fn supports(&self, lang: &LanguageCode) -> bool {
        self.languages.contains_key(lang)
    }

    /// Supported language codes, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    languages: BTreeMap<LanguageCode, LanguageTable>,
}

impl CatalogBuilder {
    /// Add (or replace) the table for `lang`.
    pub fn language(mut self, lang: LanguageCode, table: impl Into<LanguageTable>) -> Self {
        self.languages.insert(lang, table.into());
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            languages: self.languages,
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for LanguageTable {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Parse one Fluent resource and format every requested key once.
///
/// Keys without a message (or without a value) are simply left out of the table.
pub(crate) fn parse_ftl(
    lang: &LanguageCode,
    source: &str,
    wanted: &[&str],
) -> Result<LanguageTable, String> {
    let langid: LanguageIdentifier = lang
        .as_str()
        .parse()
        .map_err(|e| format!("invalid locale `{lang}`: {e}"))?;

    let resource = FluentResource::try_new(source.to_string())
        .map_err(|(_res, errs)| format!("ftl parse error: {errs:?}"))?;

    let mut bundle = FluentBundle::new(vec![langid]);
    // Plain page text: no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errs| format!("ftl add_resource error: {errs:?}"))?;

    let mut table = HashMap::new();
    for key in wanted {
        let id = keys::fluent_id(key);
        let Some(pattern) = bundle.get_message(&id).and_then(|msg| msg.value()) else {
            continue;
        };
        let mut errs = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errs).to_string();
        if !errs.is_empty() {
            warn!(locale = %lang, message_id = %id, "fluent format errors: {errs:?}");
        }
        table.insert((*key).to_string(), text);
    }
    Ok(LanguageTable { entries: table })
}

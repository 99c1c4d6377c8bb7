//! Local persistence for the language preference.
//!
//! Layout: exactly one key/value pair, [`PREFERENCE_KEY`] → language code.
//! Browsers keep it in `localStorage`; native builds keep a small JSON object
//! file in the platform data directory.

use std::borrow::Cow;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::BTreeMap;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::LanguageCode;

/// Storage key of the persisted language.
pub const PREFERENCE_KEY: &str = "preferred-language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage rejected the operation: {0}")]
    Backend(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed preference file: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key/value persistence.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Remembers the chosen language across visits.
pub trait PreferenceStore {
    /// Persisted language, or `None` if never set, unreadable, not a language
    /// code or outside the store's supported set (if it has one).
    fn load(&self) -> Option<LanguageCode>;
    /// Best-effort write; failures are logged and otherwise ignored.
    fn save(&mut self, lang: &LanguageCode);
}

/// [`PreferenceStore`] over any [`KeyValueStorage`].
#[derive(Debug, Clone)]
pub struct LanguagePreference<S> {
    storage: S,
    key: Cow<'static, str>,
    supported: Option<Vec<LanguageCode>>,
}

impl<S: KeyValueStorage> LanguagePreference<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PREFERENCE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            storage,
            key: key.into(),
            supported: None,
        }
    }

    /// Only languages in `supported` are loaded; anything else reads as unset.
    pub fn restricted_to(mut self, supported: impl IntoIterator<Item = LanguageCode>) -> Self {
        self.supported = Some(supported.into_iter().collect());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S> LanguagePreference<S> {
    fn accepts(&self, lang: &LanguageCode) -> bool {
        self.supported
            .as_ref()
            .map_or(true, |supported| supported.contains(lang))
    }
}

impl<S: KeyValueStorage> PreferenceStore for LanguagePreference<S> {
    fn load(&self) -> Option<LanguageCode> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %self.key, "[storage] preference unreadable: {err}");
                return None;
            }
        };
        match raw.parse::<LanguageCode>() {
            Ok(lang) if self.accepts(&lang) => Some(lang),
            Ok(lang) => {
                debug!(key = %self.key, %lang, "[storage] ignoring unsupported language");
                None
            }
            Err(err) => {
                debug!(key = %self.key, "[storage] ignoring stored value: {err}");
                None
            }
        }
    }

    fn save(&mut self, lang: &LanguageCode) {
        if let Err(err) = self.storage.set(&self.key, lang.as_str()) {
            warn!(key = %self.key, %lang, "[storage] preference not saved: {err}");
        }
    }
}

/// `HashMap`-backed storage for tests and headless use.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Option<HashMap<String, String>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Some(HashMap::new()),
        }
    }

    /// Storage that fails every call, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self { entries: None }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        if let Some(entries) = self.entries.as_mut() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.as_ref().ok_or(StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let entries = self.entries.as_mut().ok_or(StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object file, one string value per key.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `preferences.json` in the platform data directory. If no such directory
    /// can be determined the storage reports itself unavailable.
    pub fn in_data_dir() -> Self {
        let path = directories::ProjectDirs::from("de", "QAware", "Software ECG")
            .map(|dirs| dirs.data_dir().join("preferences.json"));
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_all(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path.as_deref().ok_or(StorageError::Unavailable)?;
        Ok(Self::read_all(path)?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path.as_deref().ok_or(StorageError::Unavailable)?;
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = Self::read_all(path).unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Private browsing modes may deny access; the storage then reports itself unavailable.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(js_error)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{value:?}"))
}

/// Storage backend of the current platform.
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = FileStorage;

/// Storage of the current platform: `localStorage` in browsers, the data-dir file elsewhere.
pub fn platform_storage() -> PlatformStorage {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorage::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FileStorage::in_data_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_absent_until_saved() {
        let mut pref = LanguagePreference::new(MemoryStorage::new());
        assert_eq!(pref.load(), None);
        pref.save(&LanguageCode::DE);
        assert_eq!(pref.load(), Some(LanguageCode::DE));
        assert_eq!(
            pref.storage().get(PREFERENCE_KEY).unwrap().as_deref(),
            Some("de")
        );
    }

    #[test]
    fn unparsable_values_load_as_absent() {
        let storage = MemoryStorage::new().with_entry(PREFERENCE_KEY, "definitely not a tag");
        assert_eq!(LanguagePreference::new(storage).load(), None);
    }

    #[test]
    fn restricted_store_ignores_unsupported_languages() {
        let storage = MemoryStorage::new().with_entry(PREFERENCE_KEY, "fr");
        let open = LanguagePreference::new(storage.clone());
        assert_eq!(open.load(), Some("fr".parse().unwrap()));

        let restricted = LanguagePreference::new(storage)
            .restricted_to([LanguageCode::EN, LanguageCode::DE]);
        assert_eq!(restricted.load(), None);

        let mut restricted = restricted;
        restricted.save(&LanguageCode::DE);
        assert_eq!(restricted.load(), Some(LanguageCode::DE));
    }

    #[test]
    fn unavailable_storage_degrades_silently() {
        let mut pref = LanguagePreference::new(MemoryStorage::unavailable());
        pref.save(&LanguageCode::PT);
        assert_eq!(pref.load(), None);
    }

    #[test]
    fn custom_key_is_respected() {
        let mut pref = LanguagePreference::with_key(MemoryStorage::new(), "lang");
        pref.save(&LanguageCode::PT);
        assert_eq!(pref.key(), "lang");
        assert_eq!(pref.storage().get("lang").unwrap().as_deref(), Some("pt"));
        assert_eq!(pref.storage().get(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn file_storage_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut first = LanguagePreference::new(FileStorage::at(&path));
        assert_eq!(first.load(), None);
        first.save(&LanguageCode::DE);

        // a fresh instance stands in for a page reload
        let reloaded = LanguagePreference::new(FileStorage::at(&path));
        assert_eq!(reloaded.load(), Some(LanguageCode::DE));
    }

    #[test]
    fn file_storage_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut storage = FileStorage::at(&path);
        storage.set(PREFERENCE_KEY, "pt").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.get(PREFERENCE_KEY).unwrap().as_deref(), Some("pt"));
    }

    #[test]
    fn corrupt_file_reads_as_error_but_is_overwritten_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let mut pref = LanguagePreference::new(FileStorage::at(&path));
        assert!(pref.storage().get(PREFERENCE_KEY).is_err());
        assert_eq!(pref.load(), None);
        pref.save(&LanguageCode::EN);
        assert_eq!(pref.load(), Some(LanguageCode::EN));
    }
}

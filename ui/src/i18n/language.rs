//! Language codes selectable on the landing page.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Short language tag (`en`, `de`, `pt`, ...).
///
/// Parsing only checks that the tag is syntactically valid; whether the page
/// actually ships strings for it is decided by the [`Catalog`](super::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(Cow<'static, str>);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{tag}` is not a valid language tag")]
pub struct LanguageCodeError {
    pub tag: String,
}

impl LanguageCode {
    pub const EN: LanguageCode = LanguageCode(Cow::Borrowed("en"));
    pub const DE: LanguageCode = LanguageCode(Cow::Borrowed("de"));
    pub const PT: LanguageCode = LanguageCode(Cow::Borrowed("pt"));

    /// Language used when nothing (valid) was persisted.
    pub const DEFAULT: LanguageCode = LanguageCode::EN;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LanguageCodeError { tag: tag.into() });
        }
        // `und` parses as a valid identifier but never names a real page language.
        match trimmed.parse::<LanguageIdentifier>() {
            Ok(id) if id.language.is_empty() => Err(LanguageCodeError { tag: tag.into() }),
            Ok(_) => Ok(Self(Cow::Owned(trimmed.to_string()))),
            Err(_) => Err(LanguageCodeError { tag: tag.into() }),
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for LanguageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bundled_codes() {
        assert_eq!("en".parse::<LanguageCode>().unwrap(), LanguageCode::EN);
        assert_eq!(" de ".parse::<LanguageCode>().unwrap(), LanguageCode::DE);
        assert_eq!("pt".parse::<LanguageCode>().unwrap(), LanguageCode::PT);
    }

    #[test]
    fn unknown_but_wellformed_codes_parse() {
        let code: LanguageCode = "xx".parse().unwrap();
        assert_eq!(code, "xx");
    }

    #[test]
    fn malformed_codes_are_rejected() {
        assert!("".parse::<LanguageCode>().is_err());
        assert!("not a tag!".parse::<LanguageCode>().is_err());
        assert!("und".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&LanguageCode::DE).unwrap();
        assert_eq!(json, "\"de\"");
        let back: LanguageCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LanguageCode::DE);
        assert!(serde_json::from_str::<LanguageCode>("\"??\"").is_err());
    }
}

//! Locale identifiers and utilities

use crate::error::{I18nError, I18nResult};
use crate::plural::PluralFamily;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A locale, identified by a BCP 47 language identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    id: LanguageIdentifier,
}

impl Locale {
    /// Parse a locale from a language code.
    ///
    /// Accepts `ru`, `ru-RU` and the POSIX-style `ru_RU`.
    pub fn from_code(code: &str) -> I18nResult<Self> {
        let normalized = code.trim().replace('_', "-");
        if normalized.is_empty() {
            return Err(I18nError::InvalidLanguageId(code.to_string()));
        }

        normalized
            .parse::<LanguageIdentifier>()
            .map(|id| Self { id })
            .map_err(|_| I18nError::InvalidLanguageId(code.to_string()))
    }

    /// Get the canonical language code for this locale
    pub fn code(&self) -> String {
        self.id.to_string()
    }

    /// Get the primary language subtag
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// Get the region subtag, if any
    pub fn region(&self) -> Option<&str> {
        self.id.region.as_ref().map(|r| r.as_str())
    }

    /// Get the plural family this locale's tables are written for
    pub fn plural_family(&self) -> PluralFamily {
        PluralFamily::for_language(self.language(), self.region())
    }

    /// Get the file-name stem of this locale's data files
    pub fn resource_stem(&self) -> String {
        match self.region() {
            Some(region) if self.plural_family() != PluralFamily::for_language(self.language(), None) => {
                format!("{}-{}", self.language(), region.to_ascii_lowercase())
            }
            _ => self.language().to_string(),
        }
    }

    /// Get the underlying language identifier
    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Self { id }
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_common_spellings() {
        assert_eq!(Locale::from_code("ru").unwrap().code(), "ru");
        assert_eq!(Locale::from_code("ru-RU").unwrap().code(), "ru-RU");
        assert_eq!(Locale::from_code("ru_RU").unwrap().code(), "ru-RU");
        assert_eq!(Locale::from_code(" de ").unwrap().language(), "de");
    }

    #[test]
    fn test_from_code_rejects_garbage() {
        assert!(matches!(
            Locale::from_code(""),
            Err(I18nError::InvalidLanguageId(_))
        ));
        assert!(Locale::from_code("not a locale!").is_err());
    }

    #[test]
    fn test_plural_family_follows_language() {
        assert_eq!(Locale::from_code("ru").unwrap().plural_family(), PluralFamily::Slavic);
        assert_eq!(Locale::from_code("uk-UA").unwrap().plural_family(), PluralFamily::Slavic);
        assert_eq!(Locale::from_code("pt-BR").unwrap().plural_family(), PluralFamily::Romance);
        assert_eq!(Locale::from_code("en-US").unwrap().plural_family(), PluralFamily::Germanic);
    }

    #[test]
    fn test_resource_stem() {
        assert_eq!(Locale::from_code("ru-RU").unwrap().resource_stem(), "ru");
        assert_eq!(Locale::from_code("pt-BR").unwrap().resource_stem(), "pt-br");
        assert_eq!(Locale::from_code("pt-PT").unwrap().resource_stem(), "pt");
    }

    #[test]
    fn test_serde_uses_code_string() {
        let locale = Locale::from_code("ru_RU").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"ru-RU\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
        assert!(serde_json::from_str::<Locale>("\"!!\"").is_err());
    }
}

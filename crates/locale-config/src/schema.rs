//! Configuration schema definitions using serde.

use locale_common::{init_tracing, LocaleError, Result};
use locale_i18n::{bundled, I18nError, Locale, LocaleRegistry, NegativeQuantityPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale table configuration.
    pub catalog: CatalogConfig,
    /// Plural selection configuration.
    pub plural: PluralConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Locale table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the locale files.
    pub locales_dir: PathBuf,
    /// Language codes to load at startup.
    pub locales: Vec<String>,
    /// Locale used when the host has no better choice.
    pub default_locale: Option<String>,
    /// Use the tables compiled into the crate for locales with no file.
    pub use_bundled: bool,
}

/// Plural selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluralConfig {
    /// How signed quantities below zero are handled.
    pub negative_quantities: NegativeQuantityPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directives, overridden by `RUST_LOG`.
    pub filter: String,
    /// Emit JSON log lines.
    pub json: bool,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), LocaleError> {
        if self.catalog.locales_dir.as_os_str().is_empty() {
            return Err(LocaleError::Config(
                "catalog.locales_dir cannot be empty".to_string(),
            ));
        }

        let locales = self.parsed_locales()?;
        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].contains(locale) {
                return Err(LocaleError::Config(format!(
                    "catalog.locales lists {locale} more than once"
                )));
            }
        }

        if let Some(default) = self.default_locale()? {
            if !locales.contains(&default) {
                return Err(LocaleError::Config(format!(
                    "catalog.default_locale {default} is not in catalog.locales"
                )));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(LocaleError::Config(
                "logging.filter cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Parses `catalog.locales` into locale identifiers.
    pub fn parsed_locales(&self) -> std::result::Result<Vec<Locale>, LocaleError> {
        self.catalog
            .locales
            .iter()
            .map(|code| {
                Locale::from_code(code)
                    .map_err(|e| LocaleError::Config(format!("catalog.locales: {e}")))
            })
            .collect()
    }

    /// Parses `catalog.default_locale`, if set.
    pub fn default_locale(&self) -> std::result::Result<Option<Locale>, LocaleError> {
        self.catalog
            .default_locale
            .as_deref()
            .map(|code| {
                Locale::from_code(code)
                    .map_err(|e| LocaleError::Config(format!("catalog.default_locale: {e}")))
            })
            .transpose()
    }

    /// Installs the global tracing subscriber described by `logging`.
    pub fn init_logging(&self) -> Result<()> {
        init_tracing(&self.logging.filter, self.logging.json)
    }

    /// Loads every configured locale into a registry.
    ///
    /// Locales without a file fall back to the bundled table of the same
    /// language when `catalog.use_bundled` is set; otherwise they are skipped
    /// and lookups for them return source strings. A file that exists but
    /// fails to parse is an error.
    pub fn build_registry(&self) -> Result<LocaleRegistry> {
        self.validate()?;

        let mut builder = LocaleRegistry::builder(&self.catalog.locales_dir);
        builder.negative_policy(self.plural.negative_quantities);

        for locale in self.parsed_locales()? {
            let e = match builder.load(&locale).map(|_| ()) {
                Ok(()) => continue,
                Err(e @ I18nError::ResourceLoad { .. }) => e,
                Err(e) => {
                    error!("Locale file for {} is broken: {}", locale, e);
                    return Err(LocaleError::from(e).into());
                }
            };

            match bundled::load(&locale).filter(|_| self.catalog.use_bundled) {
                Some(data) => {
                    info!("No file for locale {} ({}), using bundled table", locale, e);
                    builder.insert(data.map_err(LocaleError::from)?);
                }
                None => warn!("Failed to load locale {}: {}", locale, e),
            }
        }

        Ok(builder.build())
    }
}

//! Runtime validation of configuration against the file system.

use crate::schema::Config;
use locale_common::{LocaleError, Result};
use locale_i18n::{bundled, ResourceLoader};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate().map_err(Into::into)
    }

    /// Validates a configuration and checks that every configured locale has
    /// a table, either on disk or bundled.
    pub fn validate_sources(config: &Config) -> Result<()> {
        Self::validate(config)?;

        let loader = ResourceLoader::new(&config.catalog.locales_dir);
        let missing: Vec<String> = config
            .parsed_locales()?
            .into_iter()
            .filter(|locale| {
                let bundled = config.catalog.use_bundled
                    && bundled::BUNDLED_LOCALES.contains(&locale.language());
                !bundled && loader.locate(locale).is_err()
            })
            .map(|locale| locale.code())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LocaleError::Config(format!(
                "No locale file in {} for: {}",
                config.catalog.locales_dir.display(),
                missing.join(", ")
            ))
            .into())
        }
    }
}

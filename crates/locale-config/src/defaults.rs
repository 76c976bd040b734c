//! Default values for every configuration section.

use crate::schema::*;
use locale_i18n::NegativeQuantityPolicy;
use std::path::PathBuf;

/// Default directory for locale files.
pub const DEFAULT_LOCALES_DIR: &str = "locales";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            plural: PluralConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from(DEFAULT_LOCALES_DIR),
            locales: vec!["ru".to_string()],
            default_locale: Some("ru".to_string()),
            use_bundled: true,
        }
    }
}

impl Default for PluralConfig {
    fn default() -> Self {
        Self {
            negative_quantities: NegativeQuantityPolicy::Reject,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.locales_dir, PathBuf::from("locales"));
        assert_eq!(config.plural.negative_quantities, NegativeQuantityPolicy::Reject);
    }
}

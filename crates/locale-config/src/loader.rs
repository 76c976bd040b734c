//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use locale_common::{LocaleError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding `catalog.locales_dir`.
pub const ENV_LOCALES_DIR: &str = "LOCALE_DIR";
/// Environment variable overriding `catalog.default_locale`.
pub const ENV_DEFAULT_LOCALE: &str = "LOCALE_DEFAULT";
/// Environment variable overriding `logging.filter`.
pub const ENV_LOG_FILTER: &str = "LOCALE_LOG";

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(LocaleError::Config(format!(
                "Unsupported configuration file: {}",
                path.display()
            ))
            .into()),
        }
    }

    /// Parses a configuration document.
    pub fn parse(self, content: &str) -> Result<Config> {
        let config = match self {
            Self::Toml => toml::from_str(content)
                .map_err(|e| LocaleError::Serialization(e.to_string()))?,
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| LocaleError::Serialization(e.to_string()))?,
            Self::Json => serde_json::from_str(content)
                .map_err(|e| LocaleError::Serialization(e.to_string()))?,
        };
        Ok(config)
    }

    /// Renders a configuration document.
    pub fn render(self, config: &Config) -> Result<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(config)
                .map_err(|e| LocaleError::Serialization(e.to_string()))?,
            Self::Yaml => serde_yaml::to_string(config)
                .map_err(|e| LocaleError::Serialization(e.to_string()))?,
            Self::Json => serde_json::to_string_pretty(config)
                .map_err(|e| LocaleError::Serialization(e.to_string()))?,
        };
        Ok(rendered)
    }
}

/// Applies overrides from a variable lookup, such as the process environment.
pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_LOCALES_DIR) {
        debug!("Overriding catalog.locales_dir from {}", ENV_LOCALES_DIR);
        config.catalog.locales_dir = PathBuf::from(dir);
    }

    if let Some(locale) = lookup(ENV_DEFAULT_LOCALE) {
        debug!("Overriding catalog.default_locale from {}", ENV_DEFAULT_LOCALE);
        if !config.catalog.locales.contains(&locale) {
            config.catalog.locales.push(locale.clone());
        }
        config.catalog.default_locale = Some(locale);
    }

    if let Some(filter) = lookup(ENV_LOG_FILTER) {
        config.logging.filter = filter;
    }
}

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, applies environment overrides and
    /// validates the result.
    pub fn load(&self) -> Result<Config> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Like [`ConfigLoader::load`] with an explicit override lookup.
    pub fn load_with<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = ConfigFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            LocaleError::Config(format!("Cannot read {}: {e}", self.path.display()))
        })?;

        let mut config = format.parse(&content)?;
        apply_overrides(&mut config, lookup);
        config.validate()?;

        info!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }

    /// Saves configuration to file atomically.
    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let rendered = ConfigFormat::from_path(&self.path)?.render(config)?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(LocaleError::Io)?;
        file.write_all(rendered.as_bytes()).map_err(LocaleError::Io)?;
        file.persist(&self.path)
            .map_err(|e| LocaleError::Io(e.error))?;

        info!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

//! Test utilities and shared fixtures for the locale table crates.
//!
//! These helpers are available to other crates through the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Locale data files in the on-disk formats the loader understands.
pub mod locale_fixtures {
    /// A front-end script locale file with one plural entry and one context.
    pub fn russian_js() -> &'static str {
        r#"Drupal.locale = { 'pluralFormula': function ($n) { return Number((((($n%10)==1)&&(($n%100)!=11))?(0):((((($n%10)>=2)&&(($n%10)<=4))&&((($n%100)<10)||(($n%100)>=20)))?(1):2))); }, 'strings': {"":{"Edit":"Редактировать","Hide":"Скрыть","1 item\u0003@count items":"@count элемент\u0003@count элемента\u0003@count элементов"},"Long month name":{"May":"Мая"}} };"#
    }

    /// The same table as [`russian_js`] in the plain JSON format.
    pub fn russian_json() -> &'static str {
        r#"{
  "locale": "ru",
  "plural_family": "slavic",
  "strings": {
    "": {
      "Edit": "Редактировать",
      "Hide": "Скрыть",
      "1 item\u0003@count items": ["@count элемент", "@count элемента", "@count элементов"]
    },
    "Long month name": {
      "May": "Мая"
    }
  }
}"#
    }

    /// A two-form German table in the JSON format.
    pub fn german_json() -> &'static str {
        r#"{
  "locale": "de",
  "strings": {
    "": {
      "Edit": "Bearbeiten",
      "1 item\u0003@count items": ["@count Element", "@count Elemente"]
    }
  }
}"#
    }
}

/// Configuration documents for loader tests.
pub mod config_fixtures {
    /// Minimal TOML configuration.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[catalog]
locales_dir = "locales"
locales = ["ru"]
default_locale = "ru"
"#
    }

    /// Full YAML configuration.
    pub fn full_config_yaml() -> &'static str {
        r#"
catalog:
  locales_dir: "/srv/cms/languages"
  locales: ["ru", "uk", "de"]
  default_locale: "ru"
plural:
  negative_quantities: magnitude
logging:
  filter: "locale_i18n=debug"
  json: true
"#
    }
}

//! Per-locale UI string tables with plural-form selection
//!
//! This crate loads the static translation tables a CMS front end ships per
//! locale and answers lookups against them. It includes:
//!
//! - Plural rules for the common language families, selected per locale
//! - Locale identifiers backed by `unic-langid`
//! - Immutable string tables scoped by message context
//! - Parsing of script (`.js`) and JSON locale files
//! - A read-only registry shared across threads
//!
//! A lookup miss is never an error: the untranslated source string is
//! returned, and other locales are not consulted.
//!
//! # Example
//!
//! ```rust
//! use locale_i18n::{bundled, select_plural_variant, Locale, LocaleRegistry};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(select_plural_variant(21), 0);
//!
//! let mut builder = LocaleRegistry::builder("locales");
//! builder.insert(bundled::russian()?);
//! let registry = builder.build();
//!
//! let ru = Locale::from_code("ru")?;
//! assert_eq!(registry.translate(&ru, "Edit"), "Редактировать");
//! assert_eq!(registry.translate(&ru, "Unknown"), "Unknown");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod bundled;
pub mod catalog;
pub mod context;
pub mod error;
pub mod locale;
pub mod plural;
pub mod registry;
pub mod resource;

pub use catalog::{plural_key, LocaleStringTable, Translation, PLURAL_SEPARATOR};
pub use context::TranslationContext;
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use plural::{select_plural_variant, NegativeQuantityPolicy, PluralCategory, PluralFamily};
pub use registry::{LocaleRegistry, LocaleRegistryBuilder};
pub use resource::{load_file, parse_locale_file, LocaleData, LocaleFileFormat, ResourceLoader};

// Re-export the shared context type used in lookups
pub use locale_common::MessageContext;

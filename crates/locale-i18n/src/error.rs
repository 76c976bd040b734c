//! Error types for locale table operations

use thiserror::Error;

/// Errors that can occur while loading or querying locale tables
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to load a locale file
    #[error("Failed to load locale file: {path}")]
    ResourceLoad { path: String },

    /// A locale file was read but its contents are malformed
    #[error("Failed to parse locale file {path}: {reason}")]
    CatalogParse { path: String, reason: String },

    /// A signed quantity below zero reached a plural lookup
    #[error("Negative quantity {0} cannot select a plural form")]
    NegativeQuantity(i64),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for locale table operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for locale_common::LocaleError {
    fn from(error: I18nError) -> Self {
        match error {
            I18nError::Io(e) => Self::Io(e),
            other => Self::Catalog(other.to_string()),
        }
    }
}

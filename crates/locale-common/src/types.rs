//! Common type definitions and the workspace-wide error type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message context that scopes source strings.
///
/// The empty context is the default one and is what most lookups use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageContext(pub String);

impl MessageContext {
    /// The default (empty) context.
    #[must_use]
    pub const fn none() -> Self {
        Self(String::new())
    }

    /// Returns `true` for the default context.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    /// The context as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageContext {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MessageContext {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Workspace-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum LocaleError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Locale catalog error.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

//! Context-aware translation support
//!
//! A [`TranslationContext`] carries what a lookup needs besides the source
//! string: the message context that disambiguates identical source strings
//! and, for plural lookups, the quantity.

use crate::plural::{PluralCategory, PluralFamily};
use locale_common::MessageContext;

/// Context information for translations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationContext {
    /// Message context scoping the source string
    pub context: MessageContext,
    /// Count for pluralization
    pub count: Option<u64>,
}

impl TranslationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context scoped to a message context
    pub fn with_context(context: impl Into<MessageContext>) -> Self {
        Self {
            context: context.into(),
            ..Default::default()
        }
    }

    /// Create context with a count for pluralization
    pub fn with_count(count: u64) -> Self {
        Self {
            count: Some(count),
            ..Default::default()
        }
    }

    /// Set the count
    pub fn set_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the message context
    pub fn set_context(mut self, context: impl Into<MessageContext>) -> Self {
        self.context = context.into();
        self
    }

    /// Get the plural category of the count under the given family
    pub fn plural_category(&self, family: PluralFamily) -> Option<PluralCategory> {
        self.count.map(|count| family.category(count))
    }
}

/// Macro to create TranslationContext more easily
#[macro_export]
macro_rules! translation_context {
    () => {
        $crate::TranslationContext::new()
    };
    (count: $count:expr) => {
        $crate::TranslationContext::with_count($count)
    };
    (context: $context:expr) => {
        $crate::TranslationContext::with_context($context)
    };
    (context: $context:expr, count: $count:expr) => {
        $crate::TranslationContext::with_context($context).set_count($count)
    };
}

//! Locale string tables
//!
//! A [`LocaleStringTable`] maps source-language strings to their translations,
//! scoped by message context. Tables are filled once while a locale file is
//! parsed and only read afterwards.

use locale_common::MessageContext;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between the singular and plural source strings of a plural key,
/// and between the variants of a plural translation in script-form files.
pub const PLURAL_SEPARATOR: char = '\u{3}';

/// Build the table key of a plural entry
pub fn plural_key(singular: &str, plural: &str) -> String {
    format!("{singular}{PLURAL_SEPARATOR}{plural}")
}

/// A translated value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
    /// A message without plural forms
    Single(String),
    /// One variant per plural index, in index order
    Plural(Vec<String>),
}

impl Translation {
    /// Split a script-form value into variants when it carries the separator
    pub fn from_joined(value: String) -> Self {
        if value.contains(PLURAL_SEPARATOR) {
            Self::Plural(value.split(PLURAL_SEPARATOR).map(str::to_string).collect())
        } else {
            Self::Single(value)
        }
    }

    /// Get the variant at `index`.
    ///
    /// Indices past the end select the last variant; a single string answers
    /// every index.
    pub fn variant(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Plural(variants) => variants
                .get(index)
                .or_else(|| variants.last())
                .map(String::as_str),
        }
    }

    /// Get the translation as a single string (variant 0 for plural entries)
    pub fn as_single(&self) -> Option<&str> {
        self.variant(0)
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Plural(variants) => variants.len(),
        }
    }

    /// Check if this is a plural entry
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }
}

/// Source string to translation mapping for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStringTable {
    entries: HashMap<MessageContext, HashMap<String, Translation>>,
}

impl LocaleStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation, replacing any previous one for the same key
    pub fn insert<C, S>(&mut self, context: C, source: S, translation: Translation) -> Option<Translation>
    where
        C: Into<MessageContext>,
        S: Into<String>,
    {
        self.entries
            .entry(context.into())
            .or_default()
            .insert(source.into(), translation)
    }

    /// Look up a source string in the default context
    pub fn get(&self, source: &str) -> Option<&Translation> {
        self.get_in_context(&MessageContext::none(), source)
    }

    /// Look up a source string in the given context
    pub fn get_in_context(&self, context: &MessageContext, source: &str) -> Option<&Translation> {
        self.entries.get(context).and_then(|strings| strings.get(source))
    }

    /// Translate a source string, returning the source itself when untranslated
    pub fn translate<'a>(&'a self, source: &'a str) -> &'a str {
        self.translate_in_context(&MessageContext::none(), source)
    }

    /// Translate a source string in the given context, returning the source
    /// itself when untranslated
    pub fn translate_in_context<'a>(&'a self, context: &MessageContext, source: &'a str) -> &'a str {
        self.get_in_context(context, source)
            .and_then(Translation::as_single)
            .unwrap_or(source)
    }

    /// Look up the plural entry for a singular/plural source pair
    pub fn variants(&self, context: &MessageContext, singular: &str, plural: &str) -> Option<&Translation> {
        self.get_in_context(context, &plural_key(singular, plural))
    }

    /// Iterate over every entry as `(context, source, translation)`
    pub fn iter(&self) -> impl Iterator<Item = (&MessageContext, &str, &Translation)> {
        self.entries.iter().flat_map(|(context, strings)| {
            strings
                .iter()
                .map(move |(source, translation)| (context, source.as_str(), translation))
        })
    }

    /// Get all contexts that have at least one entry
    pub fn contexts(&self) -> Vec<&MessageContext> {
        let mut contexts: Vec<_> = self.entries.keys().collect();
        contexts.sort();
        contexts
    }

    /// Total number of entries across all contexts
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> LocaleStringTable {
        let mut table = LocaleStringTable::new();
        table.insert("", "Edit", Translation::Single("Редактировать".to_string()));
        table.insert(
            "Long month name",
            "May",
            Translation::Single("Мая".to_string()),
        );
        table.insert(
            "",
            plural_key("1 comment", "@count comments"),
            Translation::from_joined("@count комментарий\u{3}@count комментария\u{3}@count комментариев".to_string()),
        );
        table
    }

    #[test]
    fn test_translate_hit_and_miss() {
        let table = sample_table();
        assert_eq!(table.translate("Edit"), "Редактировать");
        assert_eq!(table.translate("Delete"), "Delete");
    }

    #[test]
    fn test_contexts_are_separate_namespaces() {
        let table = sample_table();
        let month = MessageContext::from("Long month name");
        assert_eq!(table.translate_in_context(&month, "May"), "Мая");
        assert_eq!(table.translate("May"), "May");
        assert_eq!(table.translate_in_context(&month, "Edit"), "Edit");
        assert_eq!(table.contexts().len(), 2);
    }

    #[test]
    fn test_joined_values_become_plural_entries() {
        let table = sample_table();
        let entry = table
            .variants(&MessageContext::none(), "1 comment", "@count comments")
            .unwrap();
        assert!(entry.is_plural());
        assert_eq!(entry.len(), 3);
        assert_eq!(entry.variant(1), Some("@count комментария"));
    }

    #[test]
    fn test_variant_clamps_to_last() {
        let entry = Translation::Plural(vec!["a".into(), "b".into()]);
        assert_eq!(entry.variant(5), Some("b"));
        assert_eq!(Translation::Plural(Vec::new()).variant(0), None);
        assert_eq!(Translation::Single("x".into()).variant(2), Some("x"));
    }

    #[test]
    fn test_insert_replaces_and_len_counts_all_contexts() {
        let mut table = sample_table();
        assert_eq!(table.len(), 3);
        let previous = table.insert("", "Edit", Translation::Single("Изменить".to_string()));
        assert_eq!(previous, Some(Translation::Single("Редактировать".to_string())));
        assert_eq!(table.len(), 3);
        assert_eq!(table.translate("Edit"), "Изменить");
        assert!(!table.is_empty());
        assert!(LocaleStringTable::new().is_empty());
    }

    #[test]
    fn test_translation_deserializes_untagged() {
        let single: Translation = serde_json::from_str("\"Скрыть\"").unwrap();
        assert_eq!(single, Translation::Single("Скрыть".to_string()));
        let plural: Translation = serde_json::from_str("[\"a\", \"b\", \"c\"]").unwrap();
        assert_eq!(plural.len(), 3);
    }
}

//! Locale registry
//!
//! The registry holds every loaded locale. It is filled once through
//! [`LocaleRegistryBuilder`] and is read-only afterwards, so it can be shared
//! across threads behind an `Arc` without locking.

use crate::context::TranslationContext;
use crate::error::I18nResult;
use crate::plural::{NegativeQuantityPolicy, PluralCategory, PluralFamily};
use crate::resource::{LocaleData, ResourceLoader};
use crate::Locale;
use locale_common::MessageContext;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Collects locale data before the registry is frozen
#[derive(Debug)]
pub struct LocaleRegistryBuilder {
    loader: ResourceLoader,
    locales: HashMap<Locale, Arc<LocaleData>>,
    negative_policy: NegativeQuantityPolicy,
}

impl LocaleRegistryBuilder {
    /// Create a builder reading locale files from `locales_dir`
    pub fn new<P: AsRef<Path>>(locales_dir: P) -> Self {
        Self {
            loader: ResourceLoader::new(locales_dir),
            locales: HashMap::new(),
            negative_policy: NegativeQuantityPolicy::default(),
        }
    }

    /// Set how signed quantities below zero are handled
    pub fn negative_policy(&mut self, policy: NegativeQuantityPolicy) -> &mut Self {
        self.negative_policy = policy;
        self
    }

    /// Load a locale's file from the locales directory
    pub fn load(&mut self, locale: &Locale) -> I18nResult<&mut Self> {
        debug!("Loading locale: {}", locale);

        let data = self.loader.load(locale)?;
        self.insert(data);

        info!("Successfully loaded locale: {}", locale);
        Ok(self)
    }

    /// Load several locales, skipping the ones that fail
    pub fn load_all(&mut self, locales: &[Locale]) -> &mut Self {
        for locale in locales {
            if let Err(e) = self.load(locale) {
                warn!("Failed to load locale {}: {}", locale, e);
            }
        }
        self
    }

    /// Add already-parsed locale data, replacing any previous data for the locale
    pub fn insert(&mut self, data: LocaleData) -> &mut Self {
        let locale = data.locale().clone();
        if self.locales.insert(locale.clone(), Arc::new(data)).is_some() {
            debug!("Replaced data for locale: {}", locale);
        }
        self
    }

    /// Freeze the collected data into a registry
    pub fn build(self) -> LocaleRegistry {
        info!(
            "Locale registry ready with {} locale(s)",
            self.locales.len()
        );
        LocaleRegistry {
            locales: self.locales,
            negative_policy: self.negative_policy,
        }
    }
}

/// Immutable set of loaded locales
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: HashMap<Locale, Arc<LocaleData>>,
    negative_policy: NegativeQuantityPolicy,
}

impl LocaleRegistry {
    /// Start building a registry backed by `locales_dir`
    pub fn builder<P: AsRef<Path>>(locales_dir: P) -> LocaleRegistryBuilder {
        LocaleRegistryBuilder::new(locales_dir)
    }

    /// Get the data of a loaded locale
    pub fn get(&self, locale: &Locale) -> Option<&Arc<LocaleData>> {
        self.locales.get(locale)
    }

    /// Get all loaded locales, ordered by code
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<_> = self.locales.keys().collect();
        locales.sort_by_key(|locale| locale.code());
        locales
    }

    /// Get the configured policy for negative quantities
    pub fn negative_policy(&self) -> NegativeQuantityPolicy {
        self.negative_policy
    }

    /// Get the plural family used for a locale, loaded or not
    pub fn plural_family(&self, locale: &Locale) -> PluralFamily {
        self.get(locale)
            .map_or_else(|| locale.plural_family(), |data| data.plural_family())
    }

    /// Translate a source string.
    ///
    /// Returns the source string itself when the locale is not loaded or has
    /// no translation for it. Other locales are never consulted.
    pub fn translate<'a>(&'a self, locale: &Locale, source: &'a str) -> &'a str {
        self.translate_in(locale, &MessageContext::none(), source)
    }

    /// Translate a source string using the message context of `context`.
    ///
    /// When the context carries a count and the entry has plural variants, the
    /// variant for that count is returned.
    pub fn translate_with<'a>(
        &'a self,
        locale: &Locale,
        context: &TranslationContext,
        source: &'a str,
    ) -> &'a str {
        let Some(data) = self.get(locale) else {
            return source;
        };
        let index = context.count.map_or(0, |count| data.select_variant(count));

        data.table()
            .get_in_context(&context.context, source)
            .and_then(|entry| entry.variant(index))
            .unwrap_or(source)
    }

    fn translate_in<'a>(&'a self, locale: &Locale, context: &MessageContext, source: &'a str) -> &'a str {
        match self.get(locale) {
            Some(data) => data.table().translate_in_context(context, source),
            None => {
                debug!("Locale {} is not loaded, returning source string", locale);
                source
            }
        }
    }

    /// Check if a translation exists for the source string
    pub fn has_translation(&self, locale: &Locale, source: &str) -> bool {
        self.get(locale)
            .is_some_and(|data| data.table().get(source).is_some())
    }

    /// Index of the plural variant to show for `count`
    pub fn select_variant(&self, locale: &Locale, count: u64) -> usize {
        self.plural_family(locale).variant_index(count)
    }

    /// CLDR plural category for `count`
    pub fn plural_category(&self, locale: &Locale, count: u64) -> PluralCategory {
        self.plural_family(locale).category(count)
    }

    /// Pick the translated plural variant for `count`.
    ///
    /// Without a translation, `singular` is returned for a count of 1 and
    /// `plural` otherwise.
    pub fn format_plural<'a>(
        &'a self,
        locale: &Locale,
        count: u64,
        singular: &'a str,
        plural: &'a str,
    ) -> &'a str {
        self.plural_in(locale, &MessageContext::none(), count, singular, plural)
    }

    /// Like [`LocaleRegistry::format_plural`], with a message context
    pub fn format_plural_with<'a>(
        &'a self,
        locale: &Locale,
        context: &TranslationContext,
        count: u64,
        singular: &'a str,
        plural: &'a str,
    ) -> &'a str {
        self.plural_in(locale, &context.context, count, singular, plural)
    }

    /// Like [`LocaleRegistry::format_plural`] for a signed count, normalized
    /// through the registry's negative quantity policy
    pub fn format_plural_signed<'a>(
        &'a self,
        locale: &Locale,
        count: i64,
        singular: &'a str,
        plural: &'a str,
    ) -> I18nResult<&'a str> {
        let count = self.negative_policy.normalize(count)?;
        Ok(self.format_plural(locale, count, singular, plural))
    }

    fn plural_in<'a>(
        &'a self,
        locale: &Locale,
        context: &MessageContext,
        count: u64,
        singular: &'a str,
        plural: &'a str,
    ) -> &'a str {
        let translated = self.get(locale).and_then(|data| {
            data.table()
                .variants(context, singular, plural)
                .and_then(|entry| entry.variant(data.select_variant(count)))
        });

        translated.unwrap_or_else(|| {
            if PluralFamily::Germanic.variant_index(count) == 0 {
                singular
            } else {
                plural
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{plural_key, LocaleStringTable, Translation};

    fn registry() -> LocaleRegistry {
        let ru = Locale::from_code("ru").unwrap();
        let mut table = LocaleStringTable::new();
        table.insert("", "Edit", Translation::Single("Редактировать".into()));
        table.insert(
            "",
            plural_key("1 new comment", "@count new comments"),
            Translation::Plural(vec![
                "@count новый комментарий".into(),
                "@count новых комментария".into(),
                "@count новых комментариев".into(),
            ]),
        );

        let mut builder = LocaleRegistry::builder("unused");
        builder.insert(LocaleData::new(ru, PluralFamily::Slavic, table));
        builder.build()
    }

    #[test]
    fn test_translate_and_miss() {
        let registry = registry();
        let ru = Locale::from_code("ru").unwrap();
        assert_eq!(registry.translate(&ru, "Edit"), "Редактировать");
        assert_eq!(registry.translate(&ru, "Delete"), "Delete");
        assert!(registry.has_translation(&ru, "Edit"));
        assert!(!registry.has_translation(&ru, "Delete"));
    }

    #[test]
    fn test_unloaded_locale_returns_source() {
        let registry = registry();
        let uk = Locale::from_code("uk").unwrap();
        assert_eq!(registry.translate(&uk, "Edit"), "Edit");
        assert_eq!(registry.select_variant(&uk, 3), 1);
    }

    #[test]
    fn test_format_plural_selects_slavic_variants() {
        let registry = registry();
        let ru = Locale::from_code("ru").unwrap();
        let pick = |n| registry.format_plural(&ru, n, "1 new comment", "@count new comments");

        assert_eq!(pick(1), "@count новый комментарий");
        assert_eq!(pick(3), "@count новых комментария");
        assert_eq!(pick(11), "@count новых комментариев");
        assert_eq!(pick(21), "@count новый комментарий");
    }

    #[test]
    fn test_format_plural_untranslated_uses_english_forms() {
        let registry = registry();
        let ru = Locale::from_code("ru").unwrap();
        assert_eq!(registry.format_plural(&ru, 1, "1 file", "@count files"), "1 file");
        assert_eq!(registry.format_plural(&ru, 0, "1 file", "@count files"), "@count files");
    }

    #[test]
    fn test_signed_counts_follow_policy() {
        let ru = Locale::from_code("ru").unwrap();
        let registry = registry();
        assert!(registry
            .format_plural_signed(&ru, -1, "1 new comment", "@count new comments")
            .is_err());

        let mut builder = LocaleRegistry::builder("unused");
        builder.negative_policy(NegativeQuantityPolicy::Magnitude);
        for data in registry.locales.values() {
            builder.insert(LocaleData::clone(data));
        }
        let registry = builder.build();
        assert_eq!(
            registry
                .format_plural_signed(&ru, -21, "1 new comment", "@count new comments")
                .unwrap(),
            "@count новый комментарий"
        );
    }

    #[test]
    fn test_format_plural_with_message_context() {
        let ru = Locale::from_code("ru").unwrap();
        let mut table = LocaleStringTable::new();
        table.insert(
            "Inbox",
            plural_key("1 item", "@count items"),
            Translation::Plural(vec![
                "@count письмо".into(),
                "@count письма".into(),
                "@count писем".into(),
            ]),
        );
        let mut builder = LocaleRegistry::builder("unused");
        builder.insert(LocaleData::new(ru.clone(), PluralFamily::Slavic, table));
        let registry = builder.build();

        let inbox = TranslationContext::with_context("Inbox");
        let pick = |ctx: &TranslationContext, n| {
            registry.format_plural_with(&ru, ctx, n, "1 item", "@count items")
        };

        assert_eq!(pick(&inbox, 1), "@count письмо");
        assert_eq!(pick(&inbox, 22), "@count письма");
        assert_eq!(pick(&inbox, 25), "@count писем");

        // The default context has no such entry
        let none = TranslationContext::new();
        assert_eq!(pick(&none, 22), "@count items");
        assert_eq!(pick(&none, 1), "1 item");
        assert_eq!(
            registry.format_plural(&ru, 22, "1 item", "@count items"),
            "@count items"
        );
    }

    #[test]
    fn test_translate_with_count_uses_plural_entry() {
        let registry = registry();
        let ru = Locale::from_code("ru").unwrap();
        let ctx = TranslationContext::with_count(5);
        let key = plural_key("1 new comment", "@count new comments");
        assert_eq!(registry.translate_with(&ru, &ctx, &key), "@count новых комментариев");
        assert_eq!(
            registry.translate_with(&ru, &TranslationContext::new(), "Edit"),
            "Редактировать"
        );
    }
}

//! Integration tests for loading locale files into a registry

use locale_common::test_utils::{create_temp_dir, init_test_logging, locale_fixtures, write_fixture};
use locale_i18n::{
    I18nError, Locale, LocaleRegistry, MessageContext, PluralFamily, ResourceLoader,
    TranslationContext,
};
use tempfile::TempDir;

/// Create a temporary directory with test locale files
fn create_test_locales() -> TempDir {
    init_test_logging();
    let temp_dir = create_temp_dir();

    // Script files are usually published under a content-hashed name
    write_fixture(
        temp_dir.path(),
        "ru_G2PTDgl1eJhxZFi.js",
        locale_fixtures::russian_js(),
    );
    write_fixture(temp_dir.path(), "de.json", locale_fixtures::german_json());

    temp_dir
}

fn locale(code: &str) -> Locale {
    Locale::from_code(code).unwrap()
}

#[test]
fn test_loader_finds_hashed_script_file() {
    let temp_dir = create_test_locales();
    let loader = ResourceLoader::new(temp_dir.path());

    let path = loader.locate(&locale("ru")).unwrap();
    assert!(path.ends_with("ru_G2PTDgl1eJhxZFi.js"));

    let data = loader.load(&locale("ru")).unwrap();
    assert_eq!(data.table().translate("Edit"), "Редактировать");
    assert!(data.plural_formula().is_some());
}

#[test]
fn test_loader_prefers_plain_json_name() {
    let temp_dir = create_test_locales();
    write_fixture(temp_dir.path(), "ru.json", locale_fixtures::russian_json());
    let loader = ResourceLoader::new(temp_dir.path());

    let path = loader.locate(&locale("ru-RU")).unwrap();
    assert!(path.ends_with("ru.json"));
}

#[test]
fn test_missing_locale_file() {
    let temp_dir = create_test_locales();
    let loader = ResourceLoader::new(temp_dir.path());

    let result = loader.load(&locale("pl"));
    assert!(matches!(result, Err(I18nError::ResourceLoad { .. })));
}

#[test]
fn test_registry_loads_and_translates() {
    let temp_dir = create_test_locales();
    let mut builder = LocaleRegistry::builder(temp_dir.path());
    builder.load(&locale("ru")).unwrap();
    builder.load(&locale("de")).unwrap();
    let registry = builder.build();

    assert_eq!(registry.locales().len(), 2);
    assert_eq!(registry.translate(&locale("ru"), "Hide"), "Скрыть");
    assert_eq!(registry.translate(&locale("de"), "Edit"), "Bearbeiten");
    assert_eq!(registry.plural_family(&locale("de")), PluralFamily::Germanic);
}

#[test]
fn test_load_all_skips_failures() {
    let temp_dir = create_test_locales();
    let mut builder = LocaleRegistry::builder(temp_dir.path());
    builder.load_all(&[locale("ru"), locale("pl"), locale("de")]);
    let registry = builder.build();

    let codes: Vec<String> = registry.locales().iter().map(|l| l.code()).collect();
    assert_eq!(codes, vec!["de".to_string(), "ru".to_string()]);
}

#[test]
fn test_no_fallback_between_locales() {
    let temp_dir = create_test_locales();
    let mut builder = LocaleRegistry::builder(temp_dir.path());
    builder.load(&locale("ru")).unwrap();
    builder.load(&locale("de")).unwrap();
    let registry = builder.build();

    // "Hide" exists only in the Russian table
    assert_eq!(registry.translate(&locale("de"), "Hide"), "Hide");
    assert!(!registry.has_translation(&locale("de"), "Hide"));
}

#[test]
fn test_plural_entries_from_both_formats_agree() {
    let temp_dir = create_test_locales();
    write_fixture(temp_dir.path(), "json/ru.json", locale_fixtures::russian_json());

    let mut from_script = LocaleRegistry::builder(temp_dir.path());
    from_script.load(&locale("ru")).unwrap();
    let from_script = from_script.build();

    let mut from_json = LocaleRegistry::builder(temp_dir.path().join("json"));
    from_json.load(&locale("ru")).unwrap();
    let from_json = from_json.build();

    for count in [0, 1, 2, 5, 11, 21, 22, 25, 101, 111, 121] {
        assert_eq!(
            from_script.format_plural(&locale("ru"), count, "1 item", "@count items"),
            from_json.format_plural(&locale("ru"), count, "1 item", "@count items"),
            "count = {count}"
        );
    }
    assert_eq!(
        from_json.format_plural(&locale("ru"), 22, "1 item", "@count items"),
        "@count элемента"
    );
}

#[test]
fn test_german_plural_uses_two_forms() {
    let temp_dir = create_test_locales();
    let mut builder = LocaleRegistry::builder(temp_dir.path());
    builder.load(&locale("de")).unwrap();
    let registry = builder.build();
    let de = locale("de");

    assert_eq!(registry.format_plural(&de, 1, "1 item", "@count items"), "@count Element");
    assert_eq!(registry.format_plural(&de, 0, "1 item", "@count items"), "@count Elemente");
    assert_eq!(registry.format_plural(&de, 21, "1 item", "@count items"), "@count Elemente");
}

#[test]
fn test_message_context_lookup() {
    let temp_dir = create_test_locales();
    let mut builder = LocaleRegistry::builder(temp_dir.path());
    builder.load(&locale("ru")).unwrap();
    let registry = builder.build();
    let ru = locale("ru");

    let month = TranslationContext::with_context("Long month name");
    assert_eq!(registry.translate_with(&ru, &month, "May"), "Мая");
    assert_eq!(registry.translate(&ru, "May"), "May");

    let data = registry.get(&ru).unwrap();
    assert!(data
        .table()
        .contexts()
        .contains(&&MessageContext::from("Long month name")));
}

//! Locale tables compiled into the crate
//!
//! The files under `locales/` are validated by the build script and embedded
//! with `include_str!`, so hosts can use them without shipping data files.

use crate::error::I18nResult;
use crate::resource::{parse_locale_file, LocaleData, LocaleFileFormat};
use crate::Locale;

const RUSSIAN: &str = include_str!("../locales/ru.js");

/// Language codes of the bundled tables
pub const BUNDLED_LOCALES: &[&str] = &["ru"];

/// The bundled Russian table
pub fn russian() -> I18nResult<LocaleData> {
    let locale = Locale::from_code("ru")?;
    parse_locale_file(&locale, RUSSIAN, LocaleFileFormat::Script, "bundled:ru.js")
}

/// Load the bundled table for a locale, if one exists for its language
pub fn load(locale: &Locale) -> Option<I18nResult<LocaleData>> {
    match locale.language() {
        "ru" => Some(
            parse_locale_file(locale, RUSSIAN, LocaleFileFormat::Script, "bundled:ru.js"),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plural::PluralFamily;

    #[test]
    fn test_russian_table_loads() {
        let data = russian().unwrap();
        assert_eq!(data.plural_family(), PluralFamily::Slavic);
        assert_eq!(data.table().len(), 49);
        assert_eq!(data.table().translate("Edit"), "Редактировать");
        assert_eq!(data.table().translate("Please wait..."), "Пожалуйста, подождите...");
        assert!(data.plural_formula().is_some_and(|f| f.starts_with("Number(")));
    }

    #[test]
    fn test_placeholders_are_kept_verbatim() {
        let data = russian().unwrap();
        assert_eq!(data.table().translate("Alias: @alias"), "Синоним: @alias");
        assert_eq!(
            data.table().translate("HTTP Result Code: !status"),
            "Полученный код HTTP: !status"
        );
    }

    #[test]
    fn test_load_matches_language_only() {
        let ru_ru = Locale::from_code("ru-RU").unwrap();
        let data = load(&ru_ru).unwrap().unwrap();
        assert_eq!(data.locale(), &ru_ru);
        assert!(load(&Locale::from_code("de").unwrap()).is_none());
    }
}

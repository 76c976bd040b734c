//! Locale file loading and parsing
//!
//! Two on-disk formats are understood:
//!
//! - script files (`.js`), as emitted for CMS front ends:
//!   `Drupal.locale = { 'pluralFormula': function ($n) { ... }, 'strings': {...} };`
//! - plain JSON files (`.json`) with `locale`, optional `plural_family` and
//!   `strings` fields.
//!
//! In both, `strings` maps a message context to a map of source strings to
//! translations. The plural formula of a script file is kept as text only; the
//! rule itself comes from the locale's [`PluralFamily`].

use crate::catalog::{LocaleStringTable, Translation};
use crate::error::{I18nError, I18nResult};
use crate::plural::PluralFamily;
use crate::Locale;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type RawStrings = HashMap<String, HashMap<String, Translation>>;

/// On-disk locale file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFileFormat {
    /// Front-end script assigning a locale object
    Script,
    /// Plain JSON document
    Json,
}

impl LocaleFileFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("js") => Some(Self::Script),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Everything loaded for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleData {
    locale: Locale,
    family: PluralFamily,
    table: LocaleStringTable,
    plural_formula: Option<String>,
}

impl LocaleData {
    /// Assemble locale data from parts
    pub fn new(locale: Locale, family: PluralFamily, table: LocaleStringTable) -> Self {
        Self {
            locale,
            family,
            table,
            plural_formula: None,
        }
    }

    /// Attach the plural formula text found in the source file
    pub fn with_plural_formula(mut self, formula: impl Into<String>) -> Self {
        self.plural_formula = Some(formula.into());
        self
    }

    /// The locale this data belongs to
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The plural family used to pick variants
    pub fn plural_family(&self) -> PluralFamily {
        self.family
    }

    /// The string table
    pub fn table(&self) -> &LocaleStringTable {
        &self.table
    }

    /// The plural formula text of the source file, if it had one
    pub fn plural_formula(&self) -> Option<&str> {
        self.plural_formula.as_deref()
    }

    /// Index of the variant to use for `count`
    pub fn select_variant(&self, count: u64) -> usize {
        self.family.variant_index(count)
    }
}

#[derive(Debug, Deserialize)]
struct JsonLocaleFile {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    plural_family: Option<String>,
    #[serde(default)]
    plural_formula: Option<String>,
    strings: RawStrings,
}

/// Parse the contents of a locale file
pub fn parse_locale_file(
    locale: &Locale,
    content: &str,
    format: LocaleFileFormat,
    origin: &str,
) -> I18nResult<LocaleData> {
    let data = match format {
        LocaleFileFormat::Script => parse_script(locale, content, origin)?,
        LocaleFileFormat::Json => parse_json(locale, content, origin)?,
    };

    check_variant_counts(&data, origin);
    debug!(
        "Parsed {} entries for locale {} from {}",
        data.table().len(),
        locale,
        origin
    );
    Ok(data)
}

fn parse_script(locale: &Locale, content: &str, origin: &str) -> I18nResult<LocaleData> {
    let parse_error = |reason: String| I18nError::CatalogParse {
        path: origin.to_string(),
        reason,
    };

    let start = find_property_value(content, "strings")
        .ok_or_else(|| parse_error("no 'strings' property".to_string()))?;

    // The strings object is plain JSON; stop after the first value so the
    // closing braces of the surrounding assignment are ignored.
    let strings: RawStrings = serde_json::Deserializer::from_str(&content[start..])
        .into_iter::<RawStrings>()
        .next()
        .ok_or_else(|| parse_error("empty 'strings' property".to_string()))?
        .map_err(|e| parse_error(e.to_string()))?;

    let mut data = LocaleData::new(locale.clone(), locale.plural_family(), build_table(strings));
    if let Some(formula) = extract_plural_formula(content) {
        data = data.with_plural_formula(formula);
    }
    Ok(data)
}

fn parse_json(locale: &Locale, content: &str, origin: &str) -> I18nResult<LocaleData> {
    let file: JsonLocaleFile =
        serde_json::from_str(content).map_err(|e| I18nError::CatalogParse {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

    if let Some(declared) = file.locale.as_deref() {
        match Locale::from_code(declared) {
            Ok(declared) if declared.language() != locale.language() => warn!(
                "{} declares locale {} but was loaded for {}",
                origin, declared, locale
            ),
            Err(e) => warn!("{} declares an unparseable locale: {}", origin, e),
            Ok(_) => {}
        }
    }

    let family = match file.plural_family.as_deref() {
        Some(name) => name.parse::<PluralFamily>().unwrap_or_else(|e| {
            warn!("{}: {}, using the {} default", origin, e, locale);
            locale.plural_family()
        }),
        None => locale.plural_family(),
    };

    let mut data = LocaleData::new(locale.clone(), family, build_table(file.strings));
    if let Some(formula) = file.plural_formula {
        data = data.with_plural_formula(formula);
    }
    Ok(data)
}

fn build_table(strings: RawStrings) -> LocaleStringTable {
    let mut table = LocaleStringTable::new();
    for (context, entries) in strings {
        for (source, translation) in entries {
            let translation = match translation {
                Translation::Single(value) => Translation::from_joined(value),
                plural => plural,
            };
            table.insert(context.as_str(), source, translation);
        }
    }
    table
}

fn check_variant_counts(data: &LocaleData, origin: &str) {
    let expected = data.plural_family().forms();
    for (context, source, translation) in data.table().iter() {
        if translation.is_plural() && translation.len() != expected {
            warn!(
                "{}: plural entry {:?} in context {:?} has {} variants, {} expects {}",
                origin,
                source,
                context.as_str(),
                translation.len(),
                data.plural_family(),
                expected
            );
        }
    }
}

/// Find the byte offset of the value of an object property in script text.
///
/// The key may be single-quoted, double-quoted or bare.
fn find_property_value(content: &str, key: &str) -> Option<usize> {
    for quoted in [format!("'{key}'"), format!("\"{key}\""), key.to_string()] {
        let mut search_from = 0;
        while let Some(found) = content[search_from..].find(&quoted) {
            let key_start = search_from + found;
            let after_key = key_start + quoted.len();
            search_from = after_key;

            // A bare key must not be the tail of a longer identifier
            if content[..key_start].chars().next_back().is_some_and(is_identifier_char) {
                continue;
            }
            if let Some(value) = content[after_key..].trim_start().strip_prefix(':') {
                return Some(content.len() - value.trim_start().len());
            }
        }
    }
    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Extract the returned expression of the `pluralFormula` function
fn extract_plural_formula(content: &str) -> Option<String> {
    let start = find_property_value(content, "pluralFormula")?;
    let function = &content[start..];
    let body = &function[function.find("return")? + "return".len()..];
    let end = body.find(';')?;
    let formula = body[..end].trim();
    (!formula.is_empty()).then(|| formula.to_string())
}

/// Locates and loads locale files from a directory
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    /// Base directory for locale files
    base_dir: PathBuf,
}

impl ResourceLoader {
    /// Create a new ResourceLoader
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the base directory for locale files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Find the file holding a locale's data.
    ///
    /// Tries `<stem>.json`, `<stem>.js`, then hashed script names such as
    /// `<stem>_<hash>.js`, picking the first in name order.
    pub fn locate(&self, locale: &Locale) -> I18nResult<PathBuf> {
        let stem = locale.resource_stem();

        for ext in ["json", "js"] {
            let candidate = self.base_dir.join(format!("{stem}.{ext}"));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        let prefix = format!("{stem}_");
        let mut hashed: Vec<PathBuf> = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| {
                    path.is_file()
                        && LocaleFileFormat::from_path(path) == Some(LocaleFileFormat::Script)
                        && path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .is_some_and(|n| n.starts_with(&prefix))
                })
                .collect(),
            Err(e) => {
                warn!("Cannot read locale directory {:?}: {}", self.base_dir, e);
                Vec::new()
            }
        };
        hashed.sort();

        if hashed.len() > 1 {
            warn!(
                "Found {} script files for locale {}, using {:?}",
                hashed.len(),
                locale,
                hashed[0]
            );
        }

        hashed.into_iter().next().ok_or_else(|| I18nError::ResourceLoad {
            path: self
                .base_dir
                .join(format!("{stem}.json"))
                .to_string_lossy()
                .to_string(),
        })
    }

    /// Load the data for the given locale
    pub fn load(&self, locale: &Locale) -> I18nResult<LocaleData> {
        let path = self.locate(locale)?;
        load_file(locale, &path)
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}

/// Load a locale file from an explicit path
pub fn load_file(locale: &Locale, path: &Path) -> I18nResult<LocaleData> {
    debug!("Loading locale file: {:?}", path);

    let format = LocaleFileFormat::from_path(path).ok_or_else(|| I18nError::CatalogParse {
        path: path.to_string_lossy().to_string(),
        reason: "unsupported file extension".to_string(),
    })?;

    let content = fs::read_to_string(path).map_err(|_| I18nError::ResourceLoad {
        path: path.to_string_lossy().to_string(),
    })?;

    let data = parse_locale_file(locale, &content, format, &path.to_string_lossy())?;
    info!(
        "Successfully loaded {} strings for locale {}",
        data.table().len(),
        locale
    );
    Ok(data)
}

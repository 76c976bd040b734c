//! Build script for locale-i18n crate
//!
//! This script validates the bundled locale files at compile time to ensure:
//! - Every file carries a `strings` object that is valid JSON
//! - Each context maps source strings to a string or a list of strings
//! - No plural entry has an empty variant list

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use serde_json::Value;

/// Locate the start of the `strings` value in a locale file
fn strings_offset(content: &str) -> Option<usize> {
    for key in ["'strings'", "\"strings\""] {
        if let Some(found) = content.find(key) {
            let rest = &content[found + key.len()..];
            let value = rest.trim_start().strip_prefix(':')?;
            return Some(content.len() - value.trim_start().len());
        }
    }
    None
}

/// Validate a single locale file
fn validate_locale_file(path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let start = strings_offset(&content)
        .ok_or_else(|| format!("{}: no 'strings' property", path.display()))?;

    let strings: Value = serde_json::Deserializer::from_str(&content[start..])
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| format!("{}: empty 'strings' property", path.display()))?
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    let contexts = strings
        .as_object()
        .ok_or_else(|| format!("{}: 'strings' is not an object", path.display()))?;

    for (context, entries) in contexts {
        let entries = entries
            .as_object()
            .ok_or_else(|| format!("{}: context {:?} is not an object", path.display(), context))?;

        for (source, value) in entries {
            match value {
                Value::String(_) => {}
                Value::Array(variants) if !variants.is_empty() && variants.iter().all(Value::is_string) => {}
                _ => {
                    return Err(format!(
                        "{}: entry {:?} in context {:?} must be a string or a non-empty list of strings",
                        path.display(),
                        source,
                        context
                    ))
                }
            }
        }
    }

    Ok(())
}

/// Find all bundled locale files
fn find_locale_files() -> Result<Vec<PathBuf>, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map_err(|_| "CARGO_MANIFEST_DIR not set")?;

    let locales_dir = Path::new(&manifest_dir).join("locales");

    if !locales_dir.exists() {
        return Err(format!("Locales directory not found: {}", locales_dir.display()));
    }

    let mut locale_files = Vec::new();

    for entry in fs::read_dir(&locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {}", e))? {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        let is_locale_file = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "js" || e == "json");

        if path.is_file() && is_locale_file {
            locale_files.push(path);
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }

    locale_files.sort();
    Ok(locale_files)
}

/// Main validation function
fn validate_locales() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let mut validation_errors = Vec::new();

    for path in find_locale_files()? {
        if let Err(e) = validate_locale_file(&path) {
            validation_errors.push(e);
        }
    }

    if !validation_errors.is_empty() {
        return Err(format!("Validation errors:\n{}", validation_errors.join("\n")));
    }

    Ok(())
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{}", e);
        process::exit(1);
    }
}

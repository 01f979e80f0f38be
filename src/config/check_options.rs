//! Rewriting the `CheckOptions` sequence for a single target folder.
use serde::{Deserialize, Serialize};
use serde_yaml_ng::{Mapping, Value};
use std::path::Path;

use super::template::Template;
use crate::error::GenerateError;

/// Top-level key holding the option records.
pub const CHECK_OPTIONS_KEY: &str = "CheckOptions";

/// Option key that carries the per-folder macro prefix.
pub const MACRO_PREFIX_KEY: &str = "readability-identifier-naming.MacroDefinitionPrefix";

/// A single `{key, value}` record inside `CheckOptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOption {
    /// Option identifier, e.g. `readability-identifier-naming.MacroDefinitionPrefix`.
    pub key: String,
    /// Option value.
    pub value: String,
}

impl CheckOption {
    /// Create a record.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Derive the macro prefix for a folder: `SSS` + upper-cased base name + `_`.
///
/// Only the last path component counts, so `src/engine` and `engine` both
/// yield `SSSENGINE_`.
///
/// # Examples
///
/// ```
/// use clang_tidy_gen::config::check_options::derive_prefix;
///
/// assert_eq!(derive_prefix("engine"), "SSSENGINE_");
/// assert_eq!(derive_prefix("test"), "SSSTEST_");
/// ```
#[must_use]
pub fn derive_prefix(folder: &str) -> String {
    let base = Path::new(folder)
        .file_name()
        .map_or_else(|| folder.to_string(), |n| n.to_string_lossy().into_owned());
    format!("SSS{}_", base.to_uppercase())
}

/// Whether a `CheckOptions` entry is the macro-prefix record.
fn is_macro_prefix_entry(entry: &Value) -> bool {
    entry
        .get("key")
        .and_then(Value::as_str)
        .is_some_and(|key| key == MACRO_PREFIX_KEY)
}

/// Build the config for one folder from `template`.
///
/// The returned mapping is a fresh copy: every existing macro-prefix record
/// is dropped and a single `{key, value: prefix}` record is appended. All
/// other records and top-level keys keep their order. A template without
/// `CheckOptions` gains the key at the end.
///
/// # Errors
///
/// Returns [`GenerateError::Serialize`] if the new record cannot be
/// converted to YAML.
pub fn build_config(template: &Template, prefix: &str) -> Result<Mapping, GenerateError> {
    rewrite_options(template.document(), prefix)
}

/// [`build_config`] over a raw mapping.
///
/// # Errors
///
/// Returns [`GenerateError::Serialize`] if the new record cannot be
/// converted to YAML.
pub fn rewrite_options(document: &Mapping, prefix: &str) -> Result<Mapping, GenerateError> {
    let mut config = document.clone();

    let mut options: Vec<Value> = match config.get(CHECK_OPTIONS_KEY) {
        Some(Value::Sequence(existing)) => existing
            .iter()
            .filter(|entry| !is_macro_prefix_entry(entry))
            .cloned()
            .collect(),
        _ => Vec::new(),
    };
    options.push(serde_yaml_ng::to_value(CheckOption::new(
        MACRO_PREFIX_KEY,
        prefix,
    ))?);

    config.insert(
        Value::String(CHECK_OPTIONS_KEY.to_string()),
        Value::Sequence(options),
    );
    Ok(config)
}

/// Extract the `CheckOptions` records that have string `key` and `value`.
///
/// Entries of any other shape are skipped.
#[must_use]
pub fn check_options(document: &Mapping) -> Vec<CheckOption> {
    match document.get(CHECK_OPTIONS_KEY) {
        Some(Value::Sequence(entries)) => entries
            .iter()
            .filter_map(|entry| serde_yaml_ng::from_value(entry.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    fn keys(config: &Mapping) -> Vec<String> {
        check_options(config).into_iter().map(|o| o.key).collect()
    }

    // ------------------------------------------------------------------
    // derive_prefix
    // ------------------------------------------------------------------

    #[test]
    fn prefix_for_default_folders() {
        assert_eq!(derive_prefix("engine"), "SSSENGINE_");
        assert_eq!(derive_prefix("test"), "SSSTEST_");
    }

    #[test]
    fn prefix_uses_base_name_only() {
        assert_eq!(derive_prefix("src/engine"), "SSSENGINE_");
        assert_eq!(derive_prefix("tools/asset-cook"), "SSSASSET-COOK_");
    }

    // ------------------------------------------------------------------
    // rewrite_options
    // ------------------------------------------------------------------

    #[test]
    fn appends_prefix_after_existing_options() {
        let doc = mapping("CheckOptions:\n- key: some.check\n  value: x\n");
        let config = rewrite_options(&doc, "SSSENGINE_").unwrap();
        assert_eq!(
            check_options(&config),
            vec![
                CheckOption::new("some.check", "x"),
                CheckOption::new(MACRO_PREFIX_KEY, "SSSENGINE_"),
            ]
        );
    }

    #[test]
    fn replaces_existing_prefix_entries() {
        let doc = mapping(
            "CheckOptions:\n\
             - key: readability-identifier-naming.MacroDefinitionPrefix\n  value: OLD_\n\
             - key: a\n  value: '1'\n\
             - key: readability-identifier-naming.MacroDefinitionPrefix\n  value: OLDER_\n\
             - key: b\n  value: '2'\n",
        );
        let config = rewrite_options(&doc, "SSSTEST_").unwrap();
        assert_eq!(keys(&config), vec!["a", "b", MACRO_PREFIX_KEY]);
        assert_eq!(check_options(&config)[2].value, "SSSTEST_");
    }

    #[test]
    fn rewriting_is_idempotent() {
        let doc = mapping("CheckOptions:\n- key: some.check\n  value: x\n");
        let once = rewrite_options(&doc, "SSSENGINE_").unwrap();
        let twice = rewrite_options(&once, "SSSENGINE_").unwrap();
        assert_eq!(once, twice);
        let count = keys(&twice)
            .iter()
            .filter(|k| k.as_str() == MACRO_PREFIX_KEY)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn preserves_other_entries_in_order() {
        let doc = mapping(
            "CheckOptions:\n\
             - key: z.last\n  value: '3'\n\
             - key: a.first\n  value: '1'\n\
             - key: m.middle\n  value: '2'\n",
        );
        let config = rewrite_options(&doc, "SSSENGINE_").unwrap();
        assert_eq!(
            keys(&config),
            vec!["z.last", "a.first", "m.middle", MACRO_PREFIX_KEY]
        );
    }

    #[test]
    fn preserves_top_level_key_order() {
        let doc = mapping("WarningsAsErrors: '*'\nCheckOptions: []\nChecks: '-*'\n");
        let config = rewrite_options(&doc, "SSSENGINE_").unwrap();
        let top: Vec<&str> = config.keys().filter_map(Value::as_str).collect();
        assert_eq!(top, vec!["WarningsAsErrors", "CheckOptions", "Checks"]);
    }

    #[test]
    fn adds_check_options_when_absent() {
        let doc = mapping("Checks: '-*'\n");
        let config = rewrite_options(&doc, "SSSTEST_").unwrap();
        let top: Vec<&str> = config.keys().filter_map(Value::as_str).collect();
        assert_eq!(top, vec!["Checks", CHECK_OPTIONS_KEY]);
        assert_eq!(
            check_options(&config),
            vec![CheckOption::new(MACRO_PREFIX_KEY, "SSSTEST_")]
        );
    }

    #[test]
    fn keeps_entries_without_string_key() {
        let doc = mapping("CheckOptions:\n- value: orphan\n- key: 7\n  value: n\n");
        let config = rewrite_options(&doc, "SSSENGINE_").unwrap();
        let Some(Value::Sequence(options)) = config.get(CHECK_OPTIONS_KEY) else {
            panic!("CheckOptions should be a sequence");
        };
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn does_not_mutate_the_source() {
        let doc = mapping("CheckOptions:\n- key: some.check\n  value: x\n");
        let before = doc.clone();
        let engine = rewrite_options(&doc, "SSSENGINE_").unwrap();
        let test = rewrite_options(&doc, "SSSTEST_").unwrap();
        assert_eq!(doc, before);
        assert_ne!(engine, test);
        assert_eq!(check_options(&engine)[1].value, "SSSENGINE_");
    }
}

use crate::domain::entities::LanguageCatalog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Key of the generated directionality flag stored with every set.
pub const IS_RTL_KEY: &str = "is_rtl";

/// Translation key to translated text.
pub type TranslationEntries = BTreeMap<String, String>;

/// Translations exactly as a caller sent them, before normalization.
pub type RawTranslations = BTreeMap<String, serde_json::Value>;

/// Translations of one template into one language.
///
/// Serializes flat, e.g. `{"greeting": "Ahlan", "is_rtl": true}`. The
/// `is_rtl` flag is derived from the language catalog and can only be
/// set through [`TranslationSet::for_language`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSet {
    #[serde(flatten)]
    entries: TranslationEntries,
    #[serde(default)]
    is_rtl: bool,
}

impl TranslationSet {
    /// Write-boundary constructor. Any caller-supplied `is_rtl` entry is
    /// dropped and the flag recomputed from the catalog.
    pub fn for_language(
        mut entries: TranslationEntries,
        catalog: &LanguageCatalog,
        language: &str,
    ) -> Self {
        entries.remove(IS_RTL_KEY);
        Self {
            entries,
            is_rtl: catalog.is_rtl(language),
        }
    }

    pub fn entries(&self) -> &TranslationEntries {
        &self.entries
    }

    pub fn into_entries(self) -> TranslationEntries {
        self.entries
    }

    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}

/// Converts caller input into plain string entries: `is_rtl` and nulls are
/// discarded, other scalars are stringified, nested values are ignored.
pub fn normalize_translations(raw: RawTranslations) -> TranslationEntries {
    raw.into_iter()
        .filter(|(key, _)| key != IS_RTL_KEY)
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Null
                | serde_json::Value::Array(_)
                | serde_json::Value::Object(_) => return None,
            };
            Some((key, text))
        })
        .collect()
}

/// Source of translated values during placeholder substitution.
pub trait TranslationLookup {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl TranslationLookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> TranslationLookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl TranslationLookup for TranslationSet {
    fn lookup(&self, key: &str) -> Option<&str> {
        if key == IS_RTL_KEY {
            return Some(if self.is_rtl { "true" } else { "false" });
        }
        self.entries.lookup(key)
    }
}

/// DTO for saving one language's translations
#[derive(Debug, Deserialize)]
pub struct SaveTranslationsRequest {
    pub language: String,
    #[serde(default)]
    pub translations: RawTranslations,
}

/// DTO for auto-translation
#[derive(Debug, Deserialize)]
pub struct AutoTranslateRequest {
    #[serde(rename = "englishTranslations", default)]
    pub english_translations: RawTranslations,
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub translations: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct TemplateLanguagesResponse {
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AutoTranslateResponse {
    pub message: String,
    pub translations: BTreeMap<String, TranslationEntries>,
}

//! Placeholder discovery in template text.
//!
//! Two grammars are recognized:
//! - dynamic fields, any `{{ name.path }}` token
//! - translation keys, `{{ t.key }}` or `{{ translate.key.path }}`
//!
//! Text that does not match is ignored, so malformed markup never errors.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub(crate) fn dynamic_field_regex() -> &'static Regex {
    static DYNAMIC_FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    DYNAMIC_FIELD_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}").expect("Invalid dynamic field regex")
    })
}

pub(crate) fn translation_key_regex() -> &'static Regex {
    static TRANSLATION_KEY_REGEX: OnceLock<Regex> = OnceLock::new();
    TRANSLATION_KEY_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*(?:t|translate)\.([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\s*\}\}")
            .expect("Invalid translation key regex")
    })
}

/// Collects capture group 1 of every match, deduplicated in first-seen order.
fn collect_unique(regex: &Regex, texts: &[Option<&str>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for text in texts.iter().flatten() {
        for caps in regex.captures_iter(text) {
            let identifier = &caps[1];
            if seen.insert(identifier.to_string()) {
                found.push(identifier.to_string());
            }
        }
    }

    found
}

/// Every mustache identifier in `text`, including `t.`/`translate.`
/// prefixed ones.
pub fn extract_dynamic_fields(text: Option<&str>) -> Vec<String> {
    collect_unique(dynamic_field_regex(), &[text])
}

/// Translation keys in `text`, with the `t.`/`translate.` prefix removed.
pub fn extract_translation_keys(text: Option<&str>) -> Vec<String> {
    collect_unique(translation_key_regex(), &[text])
}

/// Placeholders found across the parts of one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatePlaceholders {
    pub dynamic_fields: Vec<String>,
    pub translation_keys: Vec<String>,
}

impl TemplatePlaceholders {
    /// Scans subject, text and body, in that order. `body` should already
    /// be body-only so the wrapper's conditional markup is not picked up.
    pub fn from_parts(subject: Option<&str>, text: Option<&str>, body: Option<&str>) -> Self {
        let parts = [subject, text, body];
        Self {
            dynamic_fields: collect_unique(dynamic_field_regex(), &parts),
            translation_keys: collect_unique(translation_key_regex(), &parts),
        }
    }
}

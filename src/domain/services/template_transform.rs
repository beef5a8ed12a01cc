//! Conversion between editable body content and stored HTML documents,
//! translation substitution and right-to-left presentation.
//!
//! All rewriting is pattern based over the markup text. Tags are matched
//! independently of nesting, so malformed or adversarial markup gives
//! unspecified (but never failing) results.

use crate::domain::entities::{LanguageCatalog, TranslationLookup};
use crate::domain::services::placeholder_extractor::translation_key_regex;
use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

/// Evaluated by the email provider's renderer at send time, not here.
const RTL_HTML_CONDITION: &str = r#"{{#if t.is_rtl}} dir="rtl" style="direction: rtl;"{{/if}}"#;
const RTL_BODY_CONDITION: &str = r#"{{#if t.is_rtl}} dir="rtl" style="margin: 0; padding: 0; direction: rtl; text-align: right;"{{else}} style="margin: 0; padding: 0;"{{/if}}"#;
const NEUTRAL_BODY_STYLE: &str = r#" style="margin: 0; padding: 0;""#;

const RTL_STYLES: &str = r#"
<style>
  /* RTL Email Styles */
  .rtl-text { direction: rtl; text-align: right; }
  .rtl-container { direction: rtl; }
  .rtl-button { margin-left: 0; margin-right: auto; }
  table[dir="rtl"] td { text-align: right; }
  table[dir="rtl"] td[align="center"] { text-align: center; }
</style>
"#;

const RTL_TEXT_CLASS: &str = "rtl-text";

macro_rules! static_regex {
    ($name:ident, $pattern:literal) => {
        fn $name() -> &'static Regex {
            static REGEX: OnceLock<Regex> = OnceLock::new();
            REGEX.get_or_init(|| Regex::new($pattern).expect(concat!("Invalid regex: ", $pattern)))
        }
    };
}

static_regex!(body_content_regex, r"(?is)<body\b[^>]*>(.*?)</body>");
static_regex!(html_open_regex, r"(?i)<html\b([^>]*)>");
static_regex!(body_open_regex, r"(?i)<body\b([^>]*)>");
static_regex!(head_open_regex, r"(?i)<head\b[^>]*>");
static_regex!(table_open_regex, r"(?i)<table\b([^>]*)>");
static_regex!(text_element_regex, r"(?i)<(p|div|span|td)\b([^>]*)>");
static_regex!(
    centered_style_regex,
    r#"(?i)\bstyle\s*=\s*(?:"[^"]*|'[^']*)text-align\s*:\s*center"#
);
static_regex!(class_attr_regex, r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#);

/// Wraps body-only content in a minimal HTML document.
///
/// With `rtl_support` the `<html>` and `<body>` tags carry an unresolved
/// `{{#if t.is_rtl}}` construct for the downstream renderer; without it the
/// body only gets a neutral style.
pub fn wrap_with_document_structure(body_content: &str, rtl_support: bool) -> String {
    let (html_attrs, body_attrs) = if rtl_support {
        (RTL_HTML_CONDITION, RTL_BODY_CONDITION)
    } else {
        ("", NEUTRAL_BODY_STYLE)
    };

    format!(
        "<!DOCTYPE html>\n<html{}>\n<head>\n    <meta charset=\"UTF-8\">\n</head>\n<body{}>\n{}\n</body>\n</html>",
        html_attrs, body_attrs, body_content
    )
}

/// Returns the trimmed content between the first `<body ...>` and the
/// following `</body>`, or the input unchanged when there is no body.
pub fn extract_body_content(full_html: &str) -> &str {
    match body_content_regex().captures(full_html) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str().trim()),
        None => full_html,
    }
}

/// Substitutes `{{t.key}}` / `{{translate.key}}` tokens. Tokens whose key
/// is missing or has an empty value are left exactly as written.
pub fn replace_translation_variables<L>(content: &str, translations: &L) -> String
where
    L: TranslationLookup + ?Sized,
{
    translation_key_regex()
        .replace_all(content, |caps: &Captures| {
            match translations.lookup(&caps[1]).filter(|value| !value.is_empty()) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn add_rtl_text_class(caps: &Captures) -> String {
    let tag = &caps[1];
    let attrs = &caps[2];

    if centered_style_regex().is_match(attrs) {
        return caps[0].to_string();
    }

    let (attrs, closing) = match attrs.strip_suffix('/') {
        Some(stripped) => (stripped, "/"),
        None => (attrs, ""),
    };

    let attrs = if let Some(class_caps) = class_attr_regex().captures(attrs) {
        let classes = class_caps
            .get(1)
            .or_else(|| class_caps.get(2))
            .map_or("", |m| m.as_str());
        if classes.split_whitespace().any(|c| c == RTL_TEXT_CLASS) {
            attrs.to_string()
        } else {
            let merged = if classes.trim().is_empty() {
                format!("class=\"{}\"", RTL_TEXT_CLASS)
            } else {
                format!("class=\"{} {}\"", classes, RTL_TEXT_CLASS)
            };
            class_attr_regex()
                .replace(attrs, NoExpand(&merged))
                .into_owned()
        }
    } else {
        format!("{} class=\"{}\"", attrs, RTL_TEXT_CLASS)
    };

    format!("<{}{}{}>", tag, attrs, closing)
}

/// Language-aware rendering over a shared language catalog.
#[derive(Debug, Clone)]
pub struct TemplateTransformer {
    catalog: Arc<LanguageCatalog>,
}

impl TemplateTransformer {
    pub fn new(catalog: Arc<LanguageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn is_rtl_language(&self, language_code: &str) -> bool {
        self.catalog.is_rtl(language_code)
    }

    /// Adds right-to-left markup for RTL languages; other languages get the
    /// input back untouched.
    pub fn apply_rtl_transformations<'a>(
        &self,
        html_content: &'a str,
        language_code: &str,
    ) -> Cow<'a, str> {
        if !self.is_rtl_language(language_code) {
            return Cow::Borrowed(html_content);
        }

        let mut html = if html_open_regex().is_match(html_content) {
            html_open_regex()
                .replace(html_content, r#"<html${1} dir="rtl">"#)
                .into_owned()
        } else {
            body_open_regex()
                .replace(html_content, r#"<body${1} dir="rtl">"#)
                .into_owned()
        };

        html = if head_open_regex().is_match(&html) {
            head_open_regex()
                .replace(&html, |caps: &Captures| format!("{}{}", &caps[0], RTL_STYLES))
                .into_owned()
        } else {
            format!("{}{}", RTL_STYLES, html)
        };

        html = table_open_regex()
            .replace_all(&html, r#"<table${1} dir="rtl">"#)
            .into_owned();

        html = text_element_regex()
            .replace_all(&html, add_rtl_text_class)
            .into_owned();

        Cow::Owned(html)
    }

    /// Substitutes translations first, then applies RTL markup, so the
    /// translated text is covered by the RTL rules too.
    pub fn process_template_for_language<L>(
        &self,
        content: &str,
        translations: &L,
        language_code: &str,
    ) -> String
    where
        L: TranslationLookup + ?Sized,
    {
        let substituted = replace_translation_variables(content, translations);
        self.apply_rtl_transformations(&substituted, language_code)
            .into_owned()
    }
}

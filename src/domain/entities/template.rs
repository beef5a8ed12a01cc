use crate::domain::entities::RawTranslations;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MAX_TEMPLATE_NAME_LEN: usize = 64;

/// Email template as held by the template store.
///
/// `html_part` is a full HTML document when stored and body-only while
/// being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(rename = "TemplateName")]
    pub name: String,
    #[serde(default)]
    pub html_part: String,
    #[serde(default)]
    pub subject_part: String,
    #[serde(default)]
    pub text_part: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        html_part: impl Into<String>,
        subject_part: impl Into<String>,
        text_part: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            html_part: html_part.into(),
            subject_part: subject_part.into(),
            text_part: text_part.into(),
        }
    }
}

/// Template names follow the provider's rules: 1-64 characters of ASCII
/// letters, digits, underscores and dashes.
pub fn validate_template_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::ValidationError(
            "Template name is required".to_string(),
        ));
    }

    if name.len() > MAX_TEMPLATE_NAME_LEN {
        return Err(DomainError::ValidationError(format!(
            "Template name must be at most {} characters",
            MAX_TEMPLATE_NAME_LEN
        )));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(DomainError::ValidationError(
            "Template name may only contain letters, digits, '_' and '-'".to_string(),
        ));
    }

    Ok(())
}

/// Listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMetadata {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CreatedTimestamp")]
    pub created_at: String,
}

/// DTO for creating or updating a template. `HtmlPart` carries body-only
/// content; the document structure is added before storage.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateWriteRequest {
    #[serde(flatten)]
    pub template: Template,
    #[serde(rename = "allLanguageTranslations", default)]
    pub all_language_translations: Option<BTreeMap<String, RawTranslations>>,
}

/// Result of a template write. Translation persistence happens after the
/// template write succeeded, so its failures are reported, not raised.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateWriteOutcome {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListTemplatesQuery {
    #[serde(rename = "MaxItems")]
    pub max_items: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub items: Vec<TemplateMetadata>,
}

/// Template as presented to an operator for editing
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDetails {
    #[serde(flatten)]
    pub template: Template,
    #[serde(rename = "dynamicFields")]
    pub dynamic_fields: Vec<String>,
    #[serde(rename = "translationKeys")]
    pub translation_keys: Vec<String>,
    #[serde(rename = "availableLanguages")]
    pub available_languages: Vec<String>,
    #[serde(rename = "currentLanguage")]
    pub current_language: String,
    pub translations: serde_json::Value,
}

/// Template rendered for one language
#[derive(Debug, Clone, Serialize)]
pub struct RenderedTemplate {
    #[serde(flatten)]
    pub template: Template,
    pub language: String,
    #[serde(rename = "isRtl")]
    pub is_rtl: bool,
}

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

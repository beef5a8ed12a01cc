use crate::{
    application::services::translation_service::TranslationService,
    domain::entities::{
        validate_template_name, RawTranslations, RenderedTemplate, Template, TemplateDetails,
        TemplateMetadata, TemplateWriteOutcome, TemplateWriteRequest, SOURCE_LANGUAGE,
    },
    domain::ports::template_store::TemplateStore,
    domain::services::{
        extract_body_content, replace_translation_variables, wrap_with_document_structure,
        TemplatePlaceholders, TemplateTransformer,
    },
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DEFAULT_LIST_LIMIT: i64 = 5000;

/// Template lifecycle on top of the template store.
///
/// Operators edit body-only HTML; the store always holds full documents.
#[derive(Clone)]
pub struct TemplateService {
    template_store: Arc<dyn TemplateStore>,
    translation_service: TranslationService,
    transformer: TemplateTransformer,
}

impl TemplateService {
    pub fn new(
        template_store: Arc<dyn TemplateStore>,
        translation_service: TranslationService,
        transformer: TemplateTransformer,
    ) -> Self {
        Self {
            template_store,
            translation_service,
            transformer,
        }
    }

    pub async fn list_templates(&self, max_items: Option<i64>) -> ApiResult<Vec<TemplateMetadata>> {
        let max_items = max_items.unwrap_or(DEFAULT_LIST_LIMIT);
        if max_items <= 0 {
            return Err(ApiError::BadRequest(
                "MaxItems must be a positive number".to_string(),
            ));
        }

        self.template_store
            .list_templates(max_items.min(DEFAULT_LIST_LIMIT))
            .await
    }

    async fn load_template(&self, name: &str) -> ApiResult<Template> {
        self.template_store
            .get_template(name)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Template {} not found", name)))
    }

    /// Template with its body stripped for editing, the placeholders it
    /// uses and the translations of `language` (English by default).
    pub async fn get_template_for_editing(
        &self,
        name: &str,
        language: Option<&str>,
    ) -> ApiResult<TemplateDetails> {
        let mut template = self.load_template(name).await?;
        template.html_part = extract_body_content(&template.html_part).to_string();

        let placeholders = TemplatePlaceholders::from_parts(
            Some(&template.subject_part),
            Some(&template.text_part),
            Some(&template.html_part),
        );

        let language = language.unwrap_or(SOURCE_LANGUAGE).to_string();
        let available_languages = self.translation_service.list_languages(name).await?;
        let translations = self
            .translation_service
            .get_translations(name, &language)
            .await?;

        Ok(TemplateDetails {
            template,
            dynamic_fields: placeholders.dynamic_fields,
            translation_keys: placeholders.translation_keys,
            available_languages,
            current_language: language,
            translations: translations.to_json(),
        })
    }

    pub async fn create_template(
        &self,
        request: TemplateWriteRequest,
    ) -> ApiResult<TemplateWriteOutcome> {
        let template = self.prepare_for_storage(request.template)?;
        self.template_store.create_template(&template).await?;
        metrics::counter!("templates_written_total", "operation" => "create").increment(1);

        let warnings = self
            .save_initial_translations(&template.name, request.all_language_translations)
            .await;

        Ok(TemplateWriteOutcome {
            message: "Created".to_string(),
            warnings,
        })
    }

    pub async fn update_template(
        &self,
        request: TemplateWriteRequest,
    ) -> ApiResult<TemplateWriteOutcome> {
        let template = self.prepare_for_storage(request.template)?;
        self.template_store.update_template(&template).await?;
        metrics::counter!("templates_written_total", "operation" => "update").increment(1);

        let warnings = self
            .save_initial_translations(&template.name, request.all_language_translations)
            .await;

        Ok(TemplateWriteOutcome {
            message: "Updated".to_string(),
            warnings,
        })
    }

    /// Deletes the template, then purges its translations in every language.
    pub async fn delete_template(&self, name: &str) -> ApiResult<TemplateWriteOutcome> {
        self.template_store.delete_template(name).await?;
        metrics::counter!("templates_written_total", "operation" => "delete").increment(1);

        let mut warnings = Vec::new();
        if let Err(e) = self
            .translation_service
            .delete_template_translations(name)
            .await
        {
            tracing::warn!("Template {} deleted but translations remain: {}", name, e);
            warnings.push(e.to_string());
        }

        Ok(TemplateWriteOutcome {
            message: "Deleted".to_string(),
            warnings,
        })
    }

    /// Renders the stored template for one language. The HTML part gets
    /// substitution plus RTL markup; subject and text only substitution.
    pub async fn render_template(&self, name: &str, language: &str) -> ApiResult<RenderedTemplate> {
        let template = self.load_template(name).await?;
        let translations = self
            .translation_service
            .get_translations(name, language)
            .await?;

        let html_part = self.transformer.process_template_for_language(
            &template.html_part,
            &translations,
            language,
        );

        Ok(RenderedTemplate {
            template: Template {
                name: template.name,
                html_part,
                subject_part: replace_translation_variables(&template.subject_part, &translations),
                text_part: replace_translation_variables(&template.text_part, &translations),
            },
            language: language.to_string(),
            is_rtl: self.transformer.is_rtl_language(language),
        })
    }

    /// Body content is re-wrapped even if a full document was submitted.
    fn prepare_for_storage(&self, mut template: Template) -> ApiResult<Template> {
        validate_template_name(&template.name)?;
        let body = extract_body_content(&template.html_part);
        template.html_part = wrap_with_document_structure(body, true);
        Ok(template)
    }

    async fn save_initial_translations(
        &self,
        template_name: &str,
        all_languages: Option<BTreeMap<String, RawTranslations>>,
    ) -> Vec<String> {
        match all_languages {
            Some(all_languages) => {
                self.translation_service
                    .save_all_languages(template_name, all_languages)
                    .await
            }
            None => Vec::new(),
        }
    }
}

use crate::{
    domain::entities::{
        normalize_translations, LanguageCatalog, LanguageDescriptor, RawTranslations,
        TranslationEntries, TranslationSet, SOURCE_LANGUAGE,
    },
    domain::ports::machine_translator::MachineTranslator,
    domain::ports::translation_repository::TranslationRepository,
    infrastructure::http::middleware::error::{ApiError, ApiResult},
};
use futures::{future::join_all, stream, StreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-template, per-language translation management.
///
/// Every write goes through [`TranslationService::save_translations`], which
/// recomputes `is_rtl` from the language catalog.
#[derive(Clone)]
pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
    translator: Option<Arc<dyn MachineTranslator>>,
    catalog: Arc<LanguageCatalog>,
    auto_translate_concurrency: usize,
}

impl TranslationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        translator: Option<Arc<dyn MachineTranslator>>,
        catalog: Arc<LanguageCatalog>,
        auto_translate_concurrency: usize,
    ) -> Self {
        Self {
            translation_repo,
            translator,
            catalog,
            auto_translate_concurrency: auto_translate_concurrency.max(1),
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Stored set for the pair, empty when none exists
    pub async fn get_translations(
        &self,
        template_name: &str,
        language: &str,
    ) -> ApiResult<TranslationSet> {
        let translations = self
            .translation_repo
            .get_translations(template_name, language)
            .await?;

        match translations {
            Some(translations) => Ok(translations),
            None => {
                tracing::debug!(
                    "No translations stored: template={}, language={}",
                    template_name,
                    language
                );
                Ok(TranslationSet::for_language(
                    TranslationEntries::new(),
                    &self.catalog,
                    language,
                ))
            }
        }
    }

    pub async fn save_translations(
        &self,
        template_name: &str,
        language: &str,
        entries: TranslationEntries,
    ) -> ApiResult<TranslationSet> {
        if !self.catalog.contains(language) {
            return Err(ApiError::BadRequest(format!(
                "Unsupported language: {}",
                language
            )));
        }

        let translations = TranslationSet::for_language(entries, &self.catalog, language);
        self.translation_repo
            .put_translations(template_name, language, &translations)
            .await?;

        metrics::counter!("translations_saved_total", "language" => language.to_string())
            .increment(1);
        tracing::info!(
            "Translations saved for {} ({}) with is_rtl: {}",
            template_name,
            language,
            translations.is_rtl()
        );

        Ok(translations)
    }

    /// Saves caller-supplied values after normalizing them to strings
    pub async fn save_raw_translations(
        &self,
        template_name: &str,
        language: &str,
        raw: RawTranslations,
    ) -> ApiResult<TranslationSet> {
        self.save_translations(template_name, language, normalize_translations(raw))
            .await
    }

    /// Saves every language with at least one entry, concurrently. Returns
    /// one warning per language that could not be saved.
    pub async fn save_all_languages(
        &self,
        template_name: &str,
        all_languages: BTreeMap<String, RawTranslations>,
    ) -> Vec<String> {
        let saves = all_languages
            .into_iter()
            .map(|(language, raw)| (language, normalize_translations(raw)))
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(language, entries)| async move {
                let result = self
                    .save_translations(template_name, &language, entries)
                    .await;
                (language, result)
            });

        join_all(saves)
            .await
            .into_iter()
            .filter_map(|(language, result)| match result {
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(
                        "Failed to save translations for {} ({}): {}",
                        template_name,
                        language,
                        e
                    );
                    Some(format!(
                        "Failed to save translations for {}: {}",
                        language, e
                    ))
                }
            })
            .collect()
    }

    pub async fn list_languages(&self, template_name: &str) -> ApiResult<Vec<String>> {
        self.translation_repo.list_languages(template_name).await
    }

    /// Deletes the sets of every language stored for the template.
    /// Returns the number of languages purged.
    pub async fn delete_template_translations(&self, template_name: &str) -> ApiResult<usize> {
        let languages = self.translation_repo.list_languages(template_name).await?;

        let deletions = languages.iter().map(|language| async move {
            let result = self
                .translation_repo
                .delete_translations(template_name, language)
                .await;
            (language, result)
        });

        let mut failed = Vec::new();
        for (language, result) in join_all(deletions).await {
            if let Err(e) = result {
                tracing::error!(
                    "Failed to delete translations for {} ({}): {}",
                    template_name,
                    language,
                    e
                );
                failed.push(language.clone());
            }
        }

        if !failed.is_empty() {
            return Err(ApiError::Internal(format!(
                "Failed to delete translations for: {}",
                failed.join(", ")
            )));
        }

        tracing::info!(
            "Deleted translations of {} for {} languages",
            template_name,
            languages.len()
        );
        Ok(languages.len())
    }

    /// Machine-translates the English entries into every other catalog
    /// language and saves each result.
    ///
    /// A failed lookup for one key falls back to the English text; a failed
    /// save fails the call once all languages have been attempted.
    pub async fn auto_translate(
        &self,
        template_name: &str,
        english: RawTranslations,
    ) -> ApiResult<BTreeMap<String, TranslationEntries>> {
        let english = normalize_translations(english);
        if english.is_empty() {
            return Err(ApiError::BadRequest(
                "No English translations provided".to_string(),
            ));
        }

        let translator = self.translator.as_deref().ok_or_else(|| {
            ApiError::ServiceUnavailable("Machine translation is not configured".to_string())
        })?;

        tracing::info!(
            "Auto-translating {} keys of {} with {}",
            english.len(),
            template_name,
            translator.provider_name()
        );

        let targets: Vec<LanguageDescriptor> =
            self.catalog.translation_targets().cloned().collect();
        let english = &english;

        let results: Vec<(&'static str, ApiResult<TranslationEntries>)> = stream::iter(targets)
            .map(move |language| async move {
                let result = self
                    .translate_language(template_name, translator, english, &language)
                    .await;
                (language.code, result)
            })
            .buffer_unordered(self.auto_translate_concurrency)
            .collect()
            .await;

        let mut translated = BTreeMap::new();
        let mut failed = Vec::new();
        for (language, result) in results {
            match result {
                Ok(entries) => {
                    translated.insert(language.to_string(), entries);
                }
                Err(e) => {
                    tracing::error!("Auto-translate failed for {}: {}", language, e);
                    failed.push(language);
                }
            }
        }

        if !failed.is_empty() {
            failed.sort_unstable();
            return Err(ApiError::Internal(format!(
                "Auto-translation failed for: {}",
                failed.join(", ")
            )));
        }

        Ok(translated)
    }

    async fn translate_language(
        &self,
        template_name: &str,
        translator: &dyn MachineTranslator,
        english: &TranslationEntries,
        language: &LanguageDescriptor,
    ) -> ApiResult<TranslationEntries> {
        let translated: TranslationEntries = stream::iter(english.clone())
            .map(move |(key, text)| async move {
                let value = self.translate_text(translator, &text, language).await;
                (key, value)
            })
            .buffer_unordered(self.auto_translate_concurrency)
            .collect()
            .await;

        self.save_translations(template_name, language.code, translated.clone())
            .await?;

        Ok(translated)
    }

    async fn translate_text(
        &self,
        translator: &dyn MachineTranslator,
        text: &str,
        language: &LanguageDescriptor,
    ) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let source = self
            .catalog
            .get(SOURCE_LANGUAGE)
            .map(|lang| lang.provider_code)
            .unwrap_or(SOURCE_LANGUAGE);

        match translator
            .translate(text, source, language.provider_code)
            .await
        {
            Ok(translation) => translation,
            Err(e) => {
                tracing::warn!(
                    "Error translating {:?} to {}, keeping source text: {}",
                    text,
                    language.code,
                    e
                );
                metrics::counter!("auto_translate_fallbacks_total", "language" => language.code)
                    .increment(1);
                text.to_string()
            }
        }
    }
}

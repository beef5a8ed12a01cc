use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use template_studio::domain::entities::TranslationSet;
use template_studio::domain::ports::machine_translator::{MachineTranslator, TranslatorError};
use template_studio::domain::ports::translation_repository::TranslationRepository;
use template_studio::infrastructure::http::middleware::{ApiError, ApiResult};
use template_studio::infrastructure::persistence::Database;

/// Translator returning `"[target] text"`, failing for configured texts.
#[derive(Default)]
pub struct MockTranslator {
    failing_texts: HashSet<String>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(texts: &[&str]) -> Self {
        Self {
            failing_texts: texts.iter().map(|t| t.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recorded (text, source, target) triples
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn targets(&self) -> HashSet<String> {
        self.calls().into_iter().map(|(_, _, target)| target).collect()
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslatorError> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_language.to_string(),
            target_language.to_string(),
        ));

        if self.failing_texts.contains(text) {
            return Err(TranslatorError::Provider {
                status: 503,
                message: "mock outage".to_string(),
            });
        }

        Ok(format!("[{}] {}", target_language, text))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Repository that refuses writes for some languages and delegates the rest.
pub struct FailingTranslationRepository {
    inner: Database,
    failing_languages: HashSet<String>,
}

impl FailingTranslationRepository {
    pub fn new(inner: Database, failing_languages: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            inner,
            failing_languages: failing_languages.iter().map(|l| l.to_string()).collect(),
        })
    }
}

#[async_trait]
impl TranslationRepository for FailingTranslationRepository {
    async fn get_translations(
        &self,
        template_name: &str,
        language: &str,
    ) -> ApiResult<Option<TranslationSet>> {
        self.inner.get_translations(template_name, language).await
    }

    async fn put_translations(
        &self,
        template_name: &str,
        language: &str,
        translations: &TranslationSet,
    ) -> ApiResult<()> {
        if self.failing_languages.contains(language) {
            return Err(ApiError::Internal(format!("write refused for {}", language)));
        }
        self.inner
            .put_translations(template_name, language, translations)
            .await
    }

    async fn list_languages(&self, template_name: &str) -> ApiResult<Vec<String>> {
        self.inner.list_languages(template_name).await
    }

    async fn delete_translations(&self, template_name: &str, language: &str) -> ApiResult<()> {
        if self.failing_languages.contains(language) {
            return Err(ApiError::Internal(format!("delete refused for {}", language)));
        }
        self.inner.delete_translations(template_name, language).await
    }
}

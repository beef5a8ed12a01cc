use crate::domain::entities::TranslationSet;
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

/// Translation sets keyed by (template name, language code).
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    async fn get_translations(
        &self,
        template_name: &str,
        language: &str,
    ) -> ApiResult<Option<TranslationSet>>;

    /// Inserts or replaces the set for the pair
    async fn put_translations(
        &self,
        template_name: &str,
        language: &str,
        translations: &TranslationSet,
    ) -> ApiResult<()>;

    async fn list_languages(&self, template_name: &str) -> ApiResult<Vec<String>>;

    async fn delete_translations(&self, template_name: &str, language: &str) -> ApiResult<()>;
}

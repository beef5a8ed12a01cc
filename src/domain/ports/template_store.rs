use crate::domain::entities::{Template, TemplateMetadata};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

/// Storage of email templates. `html_part` is always a full HTML document
/// at this boundary.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn list_templates(&self, max_items: i64) -> ApiResult<Vec<TemplateMetadata>>;
    async fn get_template(&self, name: &str) -> ApiResult<Option<Template>>;
    /// Fails with `Conflict` when the name is taken
    async fn create_template(&self, template: &Template) -> ApiResult<()>;
    /// Fails with `NotFound` when the template does not exist
    async fn update_template(&self, template: &Template) -> ApiResult<()>;
    /// Fails with `NotFound` when the template does not exist
    async fn delete_template(&self, name: &str) -> ApiResult<()>;
}

pub mod error;

pub use error::{ApiError, ApiResult};

use crate::application::services::{TemplateService, TranslationService};
use crate::domain::entities::LanguageCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub template_service: TemplateService,
    pub translation_service: TranslationService,
    pub catalog: Arc<LanguageCatalog>,
}

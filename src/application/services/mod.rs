pub mod template_service;
pub mod translation_service;

pub use template_service::TemplateService;
pub use translation_service::TranslationService;

use crate::application::services::{TemplateService, TranslationService};
use crate::config::Config;
use crate::domain::entities::LanguageCatalog;
use crate::domain::ports::machine_translator::MachineTranslator;
use crate::domain::ports::template_store::TemplateStore;
use crate::domain::ports::translation_repository::TranslationRepository;
use crate::domain::services::TemplateTransformer;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::GoogleTranslateClient;
use std::sync::Arc;

pub fn build_app_state(db: Database, config: &Config) -> anyhow::Result<AppState> {
    let translator: Option<Arc<dyn MachineTranslator>> = match &config.translate_api_key {
        Some(api_key) => {
            let client = GoogleTranslateClient::new(
                config.translate_api_url.clone(),
                api_key.clone(),
                config.translate_timeout,
            )?;
            tracing::info!("Machine translation enabled ({})", client.provider_name());
            Some(Arc::new(client) as Arc<dyn MachineTranslator>)
        }
        None => {
            tracing::warn!("TRANSLATE_API_KEY not set, auto-translation is disabled");
            None
        }
    };

    Ok(assemble_state(
        Arc::new(db.clone()),
        Arc::new(db),
        translator,
        config.auto_translate_concurrency,
    ))
}

/// Wires services over the given adapters with the default language catalog.
pub fn assemble_state(
    template_store: Arc<dyn TemplateStore>,
    translation_repo: Arc<dyn TranslationRepository>,
    translator: Option<Arc<dyn MachineTranslator>>,
    auto_translate_concurrency: usize,
) -> AppState {
    let catalog = Arc::new(LanguageCatalog::default());
    tracing::info!("Language catalog loaded with {} languages", catalog.languages().len());

    let translation_service = TranslationService::new(
        translation_repo,
        translator,
        catalog.clone(),
        auto_translate_concurrency,
    );
    let template_service = TemplateService::new(
        template_store,
        translation_service.clone(),
        TemplateTransformer::new(catalog.clone()),
    );

    AppState {
        template_service,
        translation_service,
        catalog,
    }
}

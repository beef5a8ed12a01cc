use crate::helpers::MockTranslator;
use std::sync::Arc;
use template_studio::bootstrap::assemble_state;
use template_studio::domain::ports::machine_translator::MachineTranslator;
use template_studio::domain::ports::translation_repository::TranslationRepository;
use template_studio::infrastructure::http::middleware::AppState;
use template_studio::infrastructure::persistence::Database;

pub fn build_state(db: &Database, translator: Option<Arc<MockTranslator>>) -> AppState {
    build_state_with_repo(db, Arc::new(db.clone()), translator)
}

pub fn build_state_with_repo(
    db: &Database,
    translation_repo: Arc<dyn TranslationRepository>,
    translator: Option<Arc<MockTranslator>>,
) -> AppState {
    let translator = translator.map(|t| t as Arc<dyn MachineTranslator>);
    assemble_state(Arc::new(db.clone()), translation_repo, translator, 4)
}

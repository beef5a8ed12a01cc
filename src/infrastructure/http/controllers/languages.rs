use crate::{domain::entities::LanguageDescriptor, infrastructure::http::middleware::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SupportedLanguagesResponse {
    pub languages: Vec<LanguageDescriptor>,
}

pub async fn get_supported_languages(
    State(state): State<AppState>,
) -> Json<SupportedLanguagesResponse> {
    Json(SupportedLanguagesResponse {
        languages: state.catalog.languages().to_vec(),
    })
}

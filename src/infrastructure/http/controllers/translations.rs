use crate::{
    domain::entities::{
        AutoTranslateRequest, AutoTranslateResponse, LanguageQuery, SaveTranslationsRequest,
        TemplateLanguagesResponse, TranslationsResponse, SOURCE_LANGUAGE,
    },
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

pub async fn get_translations(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> ApiResult<Json<TranslationsResponse>> {
    let language = query.language.as_deref().unwrap_or(SOURCE_LANGUAGE);
    let translations = state
        .translation_service
        .get_translations(&name, language)
        .await?;
    Ok(Json(TranslationsResponse {
        translations: translations.to_json(),
    }))
}

pub async fn save_translations(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<SaveTranslationsRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let saved = state
        .translation_service
        .save_raw_translations(&name, &request.language, request.translations)
        .await?;
    Ok(Json(json!({
        "message": "Translations saved successfully",
        "translations": saved.to_json(),
    })))
}

pub async fn get_template_languages(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<TemplateLanguagesResponse>> {
    let languages = state.translation_service.list_languages(&name).await?;
    Ok(Json(TemplateLanguagesResponse { languages }))
}

pub async fn auto_translate(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<AutoTranslateRequest>,
) -> ApiResult<Json<AutoTranslateResponse>> {
    let translations = state
        .translation_service
        .auto_translate(&name, request.english_translations)
        .await?;
    Ok(Json(AutoTranslateResponse {
        message: "Auto-translation completed successfully".to_string(),
        translations,
    }))
}

use crate::{
    domain::entities::{
        LanguageQuery, ListTemplatesQuery, RenderedTemplate, TemplateDetails,
        TemplateListResponse, TemplateWriteOutcome, TemplateWriteRequest, SOURCE_LANGUAGE,
    },
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> ApiResult<Json<TemplateListResponse>> {
    let items = state.template_service.list_templates(query.max_items).await?;
    Ok(Json(TemplateListResponse { items }))
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let details: TemplateDetails = state
        .template_service
        .get_template_for_editing(&name, query.language.as_deref())
        .await?;
    Ok(Json(serde_json::json!({ "data": details })))
}

pub async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateWriteRequest>,
) -> ApiResult<(StatusCode, Json<TemplateWriteOutcome>)> {
    let outcome = state.template_service.create_template(request).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn update_template(
    State(state): State<AppState>,
    Json(request): Json<TemplateWriteRequest>,
) -> ApiResult<Json<TemplateWriteOutcome>> {
    let outcome = state.template_service.update_template(request).await?;
    Ok(Json(outcome))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<TemplateWriteOutcome>> {
    let outcome = state.template_service.delete_template(&name).await?;
    Ok(Json(outcome))
}

pub async fn render_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> ApiResult<Json<RenderedTemplate>> {
    let language = query.language.as_deref().unwrap_or(SOURCE_LANGUAGE);
    let rendered = state
        .template_service
        .render_template(&name, language)
        .await?;
    Ok(Json(rendered))
}

use crate::infrastructure::http::controllers::{languages, templates, translations};
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Template bodies are small; anything larger is rejected before parsing.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        // Template routes
        .route("/list-templates", get(templates::list_templates))
        .route("/get-template/:name", get(templates::get_template))
        .route("/create-template", post(templates::create_template))
        .route("/update-template", put(templates::update_template))
        .route("/delete-template/:name", delete(templates::delete_template))
        .route("/render-template/:name", get(templates::render_template))
        // Translation routes
        .route(
            "/translations/:name",
            get(translations::get_translations).post(translations::save_translations),
        )
        .route(
            "/template-languages/:name",
            get(translations::get_template_languages),
        )
        .route("/auto-translate/:name", post(translations::auto_translate))
        .route(
            "/supported-languages",
            get(languages::get_supported_languages),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

mod helpers;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use helpers::*;
use serde_json::{json, Value};
use std::sync::Arc;
use template_studio::infrastructure::http::router::build_router;
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

async fn test_app(translator: Option<Arc<MockTranslator>>) -> Router {
    let db = setup_test_db().await;
    build_router(build_state(&db, translator))
}

fn welcome_template() -> Value {
    json!({
        "TemplateName": "welcome",
        "SubjectPart": "{{t.subject}}",
        "HtmlPart": "<p>{{t.greeting}} {{name}}</p>",
        "TextPart": "{{t.greeting}}",
        "allLanguageTranslations": {
            "en": {"subject": "Welcome", "greeting": "Hello"},
            "ar": {"subject": "Ahlan", "greeting": "Marhaba", "is_rtl": false}
        }
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app(None).await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_template_lifecycle() {
    let app = test_app(None).await;

    let (status, body) = send(&app, Method::POST, "/create-template", Some(welcome_template())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "Created"}));

    let (status, body) = send(&app, Method::GET, "/list-templates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["Name"], "welcome");
    assert!(body["items"][0]["CreatedTimestamp"].is_string());

    let (status, body) = send(&app, Method::GET, "/get-template/welcome", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["TemplateName"], "welcome");
    assert_eq!(data["HtmlPart"], "<p>{{t.greeting}} {{name}}</p>");
    assert_eq!(data["translationKeys"], json!(["subject", "greeting"]));
    assert_eq!(data["availableLanguages"], json!(["ar", "en"]));
    assert_eq!(data["currentLanguage"], "en");
    assert_eq!(data["translations"]["greeting"], "Hello");

    let mut update = welcome_template();
    update["HtmlPart"] = json!("<div>{{t.greeting}}</div>");
    update.as_object_mut().unwrap().remove("allLanguageTranslations");
    let (status, body) = send(&app, Method::PUT, "/update-template", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Updated");

    let (_, body) = send(&app, Method::GET, "/render-template/welcome?language=ar", None).await;
    assert_eq!(body["isRtl"], true);
    assert_eq!(body["language"], "ar");
    assert_eq!(body["SubjectPart"], "Ahlan");
    assert!(body["HtmlPart"]
        .as_str()
        .unwrap()
        .contains(r#"<div class="rtl-text">Marhaba</div>"#));

    let (status, body) = send(&app, Method::DELETE, "/delete-template/welcome", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted");

    let (status, body) = send(&app, Method::GET, "/template-languages/welcome", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"languages": []}));

    let (status, body) = send(&app, Method::GET, "/get-template/welcome", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("welcome"));
}

#[tokio::test]
async fn test_error_statuses() {
    let app = test_app(None).await;

    let (status, _) = send(&app, Method::POST, "/create-template", Some(welcome_template())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/create-template", Some(welcome_template())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let mut invalid = welcome_template();
    invalid["TemplateName"] = json!("has spaces");
    let (status, _) = send(&app, Method::POST, "/create-template", Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut missing = welcome_template();
    missing["TemplateName"] = json!("missing");
    let (status, _) = send(&app, Method::PUT, "/update-template", Some(missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/list-templates?MaxItems=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, "/delete-template/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_translation_endpoints() {
    let app = test_app(None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/translations/welcome",
        Some(json!({"language": "he", "translations": {"greeting": "Shalom", "is_rtl": false}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translations"], json!({"greeting": "Shalom", "is_rtl": true}));

    let (status, body) = send(&app, Method::GET, "/translations/welcome?language=he", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translations"]["is_rtl"], true);

    let (_, body) = send(&app, Method::GET, "/translations/welcome", None).await;
    assert_eq!(body["translations"], json!({"is_rtl": false}));

    let (status, _) = send(
        &app,
        Method::POST,
        "/translations/welcome",
        Some(json!({"language": "tlh", "translations": {"greeting": "nuqneH"}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/template-languages/welcome", None).await;
    assert_eq!(body["languages"], json!(["he"]));
}

#[tokio::test]
async fn test_auto_translate_endpoint() {
    let app = test_app(Some(Arc::new(MockTranslator::new()))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auto-translate/welcome",
        Some(json!({"englishTranslations": {"greeting": "Hello"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translations"]["fr"]["greeting"], "[fr] Hello");
    assert!(body["translations"].get("en").is_none());

    let (_, body) = send(&app, Method::GET, "/translations/welcome?language=ar", None).await;
    assert_eq!(body["translations"]["is_rtl"], true);

    let (status, _) = send(
        &app,
        Method::POST,
        "/auto-translate/welcome",
        Some(json!({"englishTranslations": {}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auto_translate_unavailable_without_provider() {
    let app = test_app(None).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auto-translate/welcome",
        Some(json!({"englishTranslations": {"greeting": "Hello"}})),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Machine translation is not configured");
}

#[tokio::test]
async fn test_supported_languages() {
    let app = test_app(None).await;

    let (status, body) = send(&app, Method::GET, "/supported-languages", None).await;
    assert_eq!(status, StatusCode::OK);

    let languages = body["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 33);
    let arabic = languages.iter().find(|l| l["code"] == "ar").unwrap();
    assert_eq!(arabic["rtl"], true);
    assert_eq!(arabic["name"], "Arabic");
    assert!(languages.iter().all(|l| l.get("provider_code").is_none()));
}

use std::collections::HashMap;
use std::sync::Arc;
use template_studio::domain::entities::{LanguageCatalog, TranslationEntries, TranslationSet};
use template_studio::domain::services::{
    extract_body_content, replace_translation_variables, wrap_with_document_structure,
    TemplateTransformer,
};

fn transformer() -> TemplateTransformer {
    TemplateTransformer::new(Arc::new(LanguageCatalog::default()))
}

fn entries(pairs: &[(&str, &str)]) -> TranslationEntries {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_body_round_trip_through_wrapper() {
    let bodies = [
        "<p>Hello</p>",
        "<table><tr><td>{{t.cell}}</td></tr></table>",
        "Line one\n<div>Line two</div>",
        "",
    ];

    for body in bodies {
        for rtl_support in [true, false] {
            let wrapped = wrap_with_document_structure(body, rtl_support);
            assert_eq!(extract_body_content(&wrapped), body);
        }
    }
}

#[test]
fn test_extract_body_without_body_returns_input() {
    let fragment = "<p>No document here</p>";
    assert_eq!(extract_body_content(fragment), fragment);
}

#[test]
fn test_extract_body_is_case_insensitive_and_spans_lines() {
    let html = "<HTML><BODY class=\"x\">\n  <p>a</p>\n  <p>b</p>\n</BODY></HTML>";
    assert_eq!(extract_body_content(html), "<p>a</p>\n  <p>b</p>");
}

#[test]
fn test_rtl_support_wrapper_contains_conditional() {
    let wrapped = wrap_with_document_structure("<p>x</p>", true);
    assert!(wrapped.starts_with("<!DOCTYPE html>"));
    assert!(wrapped.contains("{{#if t.is_rtl}}"));
    assert!(wrapped.contains("<meta charset=\"UTF-8\">"));

    let plain = wrap_with_document_structure("<p>x</p>", false);
    assert!(!plain.contains("{{#if"));
    assert!(plain.contains(r#"<body style="margin: 0; padding: 0;">"#));
}

#[test]
fn test_is_rtl_language() {
    let t = transformer();
    assert!(t.is_rtl_language("ar"));
    assert!(t.is_rtl_language("he"));
    for code in ["en", "fr", "zh_Hans", "pt_BR", "", "xx", "AR"] {
        assert!(!t.is_rtl_language(code), "{} should not be RTL", code);
    }
}

#[test]
fn test_ltr_languages_are_untouched() {
    let t = transformer();
    let html = wrap_with_document_structure("<p>Hi</p><table><tr><td>x</td></tr></table>", true);

    for code in ["en", "de", "ja", "unknown"] {
        assert_eq!(t.apply_rtl_transformations(&html, code), html.as_str());
    }
}

#[test]
fn test_rtl_transformation_of_full_document() {
    let t = transformer();
    let html = "<html><head><title>x</title></head><body><table><tr><td>1</td></tr></table><p>Text</p></body></html>";

    let out = t.apply_rtl_transformations(html, "ar");

    assert!(out.starts_with(r#"<html dir="rtl"><head>"#));
    assert!(out.contains(".rtl-text { direction: rtl; text-align: right; }"));
    assert!(out.contains(r#"<table dir="rtl">"#));
    assert!(out.contains(r#"<td class="rtl-text">1</td>"#));
    assert!(out.contains(r#"<p class="rtl-text">Text</p>"#));
    assert!(out.find("<style>").unwrap() > out.find("<head>").unwrap());
}

#[test]
fn test_rtl_transformation_of_fragment() {
    let t = transformer();
    let out = t.apply_rtl_transformations("<div>Shalom</div>", "he");

    assert!(out.starts_with("\n<style>"));
    assert!(out.ends_with(r#"<div class="rtl-text">Shalom</div>"#));
}

#[test]
fn test_rtl_body_gets_dir_without_html_tag() {
    let t = transformer();
    let out = t.apply_rtl_transformations("<body><span>x</span></body>", "ar");
    assert!(out.contains(r#"<body dir="rtl">"#));
    assert!(out.contains(r#"<span class="rtl-text">x</span>"#));
}

#[test]
fn test_centered_elements_keep_alignment() {
    let t = transformer();
    let html = r#"<body><p style="text-align: center;">Logo</p><p class="lead">Hi</p></body>"#;

    let out = t.apply_rtl_transformations(html, "ar");

    assert!(out.contains(r#"<p style="text-align: center;">Logo</p>"#));
    assert!(out.contains(r#"<p class="lead rtl-text">Hi</p>"#));
}

#[test]
fn test_other_tags_are_not_matched() {
    let t = transformer();
    let out = t.apply_rtl_transformations("<pre>code</pre><header>h</header>", "ar");
    assert!(out.contains("<pre>code</pre><header>h</header>"));
}

#[test]
fn test_replace_accepts_any_lookup() {
    let mut map = HashMap::new();
    map.insert("name".to_string(), "Ada".to_string());
    assert_eq!(replace_translation_variables("Hi {{t.name}}", &map), "Hi Ada");

    let catalog = LanguageCatalog::default();
    let set = TranslationSet::for_language(entries(&[("name", "Ada")]), &catalog, "ar");
    assert_eq!(
        replace_translation_variables("{{t.name}} {{t.is_rtl}}", &set),
        "Ada true"
    );
}

#[test]
fn test_process_for_english_is_substitution_only() {
    let t = transformer();
    let content = "<p>{{t.greeting}}, {{name}}</p>";
    let translations = entries(&[("greeting", "Hello")]);

    assert_eq!(
        t.process_template_for_language(content, &translations, "en"),
        replace_translation_variables(content, &translations)
    );
}

#[test]
fn test_process_end_to_end_arabic() {
    let t = transformer();
    let catalog = LanguageCatalog::default();
    let translations = TranslationSet::for_language(entries(&[("greeting", "Marhaba")]), &catalog, "ar");

    let out = t.process_template_for_language("<p>{{t.greeting}}</p>", &translations, "ar");

    assert!(out.contains(r#"<p class="rtl-text">Marhaba</p>"#));
    assert!(out.contains("<style>"));
    assert!(!out.contains("{{t.greeting}}"));
}

#[test]
fn test_process_of_stored_document_keeps_downstream_conditional() {
    let t = transformer();
    let stored = wrap_with_document_structure("<p>{{t.body}}</p>", true);
    let translations = entries(&[("body", "Contenu")]);

    let out = t.process_template_for_language(&stored, &translations, "fr");

    assert!(out.contains("{{#if t.is_rtl}}"));
    assert!(out.contains("<p>Contenu</p>"));
}

//! Tests for decoding the Gemini response envelope into a post.

use blogsmith_core::Section;
use blogsmith_error::GeminiErrorKind;
use blogsmith_models::gemini::decode_post;
use serde_json::json;

fn envelope_with_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                }
            }
        ]
    })
}

const POST_JSON: &str = r#"{
    "title": "Automatyzacja marketingu",
    "meta": "Jak zacząć z automatyzacją marketingu.",
    "lead": "Automatyzacja oszczędza czas.",
    "sections": [
        { "heading": "Od czego zacząć", "content": "Od audytu procesów." },
        { "heading": "Narzędzia", "content": "CRM i e-mail." }
    ],
    "summary": "Warto zacząć od małych kroków.",
    "cta": "Skontaktuj się z nami.",
    "tags": ["marketing", "automatyzacja"]
}"#;

#[test]
fn decodes_well_formed_envelope() {
    let raw = envelope_with_text(POST_JSON);

    let post = decode_post(&raw).expect("valid envelope decodes");

    assert_eq!(post.title(), "Automatyzacja marketingu");
    assert_eq!(post.meta().as_deref(), Some("Jak zacząć z automatyzacją marketingu."));
    assert_eq!(post.lead(), "Automatyzacja oszczędza czas.");
    assert_eq!(
        post.sections(),
        &[
            Section::new("Od czego zacząć", "Od audytu procesów."),
            Section::new("Narzędzia", "CRM i e-mail."),
        ]
    );
    assert_eq!(post.summary().as_deref(), Some("Warto zacząć od małych kroków."));
    assert_eq!(post.cta().as_deref(), Some("Skontaktuj się z nami."));
    assert_eq!(post.tags(), &["marketing", "automatyzacja"]);
}

#[test]
fn decodes_fenced_candidate_text() {
    let fenced = format!("```json\n{}\n```", POST_JSON);
    let raw = envelope_with_text(&fenced);

    let post = decode_post(&raw).expect("fenced envelope decodes");
    assert_eq!(post.title(), "Automatyzacja marketingu");
}

#[test]
fn optional_fields_default_when_absent() {
    let raw = envelope_with_text(r#"{"title": "Tytuł"}"#);

    let post = decode_post(&raw).expect("minimal post decodes");
    assert_eq!(post.title(), "Tytuł");
    assert!(post.meta().is_none());
    assert!(post.lead().is_empty());
    assert!(post.sections().is_empty());
    assert!(post.tags().is_empty());
}

#[test]
fn missing_candidates_preserves_envelope() {
    let raw = json!({ "promptFeedback": { "blockReason": "SAFETY" } });

    let err = decode_post(&raw).expect_err("empty envelope fails");
    match err.kind {
        GeminiErrorKind::Decode { reason, raw: kept } => {
            assert!(reason.contains("no candidate text"));
            assert_eq!(kept, raw);
        }
        other => panic!("expected decode error, got: {:?}", other),
    }
}

#[test]
fn prose_candidate_text_preserves_envelope() {
    let raw = envelope_with_text("Oto artykuł:\n\nAutomatyzacja marketingu...");

    let err = decode_post(&raw).expect_err("prose text fails");
    match err.kind {
        GeminiErrorKind::Decode { reason, raw: kept } => {
            assert!(reason.contains("not a valid post"));
            assert_eq!(kept, raw);
        }
        other => panic!("expected decode error, got: {:?}", other),
    }
}

#[test]
fn candidate_without_title_fails() {
    let raw = envelope_with_text(r#"{"lead": "bez tytułu"}"#);

    let err = decode_post(&raw).expect_err("post without title fails");
    assert!(matches!(err.kind, GeminiErrorKind::Decode { .. }));
}

//! Tests for the HTTP API: success paths, the error envelope contract, and
//! the POST-only rule.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use blogsmith_error::{BlogsmithResult, GeminiError, GeminiErrorKind};
use blogsmith_models::{ImageGateway, TextGateway};
use blogsmith_server::{ContentService, create_router};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Text gateway double: records prompts and replays a canned outcome.
struct MockTextGateway {
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
    outcome: BlogsmithResult<Value>,
}

#[async_trait]
impl TextGateway for MockTextGateway {
    async fn generate(&self, prompt: &str) -> BlogsmithResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("prompt log lock")
            .push(prompt.to_string());
        self.outcome.clone()
    }
}

/// Image gateway double.
struct MockImageGateway {
    calls: Arc<AtomicUsize>,
    outcome: BlogsmithResult<Value>,
}

#[async_trait]
impl ImageGateway for MockImageGateway {
    async fn generate(&self, _prompt: &str) -> BlogsmithResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

struct Harness {
    router: Router,
    text_calls: Arc<AtomicUsize>,
    image_calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

fn harness(text_outcome: BlogsmithResult<Value>, image_outcome: BlogsmithResult<Value>) -> Harness {
    let text_calls = Arc::new(AtomicUsize::new(0));
    let image_calls = Arc::new(AtomicUsize::new(0));
    let prompts = Arc::new(Mutex::new(Vec::new()));

    let service = ContentService::new(
        MockTextGateway {
            calls: text_calls.clone(),
            prompts: prompts.clone(),
            outcome: text_outcome,
        },
        MockImageGateway {
            calls: image_calls.clone(),
            outcome: image_outcome,
        },
    );

    Harness {
        router: create_router(Arc::new(service)),
        text_calls,
        image_calls,
        prompts,
    }
}

fn post_envelope(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [{ "text": text }] } }
        ]
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn generate_blog_post_returns_decoded_post() {
    let post_text = json!({
        "title": "Tytuł",
        "lead": "Wstęp.",
        "sections": [{ "heading": "H1", "content": "Treść." }],
        "tags": ["a", "b"]
    })
    .to_string();
    let h = harness(Ok(post_envelope(&post_text)), Ok(json!({ "data": [] })));

    let request = post_json(
        "/generate-blog-post",
        json!({ "topic": "X", "keywords": "a,b", "cta": true }),
    );
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Tytuł");
    assert_eq!(body["sections"][0]["heading"], "H1");
    assert_eq!(body["tags"], json!(["a", "b"]));
    assert_eq!(h.text_calls.load(Ordering::SeqCst), 1);

    let prompts = h.prompts.lock().expect("prompt log lock");
    assert!(prompts[0].contains("X"));
    assert!(prompts[0].contains("a,b"));
    assert!(prompts[0].contains("Dodaj sekcję z wezwaniem do działania."));
    assert!(!prompts[0].contains("Dodaj meta description."));
}

#[tokio::test]
async fn undecodable_envelope_returns_500_with_raw() {
    let envelope = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
    let h = harness(Ok(envelope.clone()), Ok(json!({ "data": [] })));

    let request = post_json("/generate-blog-post", json!({ "topic": "X" }));
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "AI response parse error");
    assert_eq!(body["raw"], envelope);
}

#[tokio::test]
async fn transport_failure_returns_500_with_message() {
    let failure = GeminiError::new(GeminiErrorKind::Http("connection refused".to_string()));
    let h = harness(Err(failure.into()), Ok(json!({ "data": [] })));

    let request = post_json("/generate-blog-post", json!({ "topic": "X" }));
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("connection refused"));
    assert!(body.get("raw").is_none());
}

#[tokio::test]
async fn generate_thumbnail_returns_image_url() {
    let h = harness(
        Ok(json!({})),
        Ok(json!({ "data": [{ "url": "https://images.example.com/t.png" }] })),
    );

    let request = post_json(
        "/generate-thumbnail",
        json!({ "title": "Tytuł", "keywords": "a,b" }),
    );
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "imageUrl": "https://images.example.com/t.png" }));
    assert_eq!(h.image_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_image_data_returns_500_with_raw() {
    let payload = json!({ "created": 1700000000, "data": [] });
    let h = harness(Ok(json!({})), Ok(payload.clone()));

    let request = post_json("/generate-thumbnail", json!({ "title": "T" }));
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Image generation failed");
    assert_eq!(body["raw"], payload);
}

#[tokio::test]
async fn non_post_method_returns_405_without_gateway_call() {
    for uri in [
        "/generate-blog-post",
        "/generate-thumbnail",
        "/generate-audience",
        "/generate-keywords",
        "/cron-generate-daily-post",
    ] {
        let h = harness(Ok(json!({})), Ok(json!({})));
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let response = h.router.oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Method not allowed" }), "{uri}");
        assert_eq!(h.text_calls.load(Ordering::SeqCst), 0, "{uri}");
        assert_eq!(h.image_calls.load(Ordering::SeqCst), 0, "{uri}");
    }
}

#[tokio::test]
async fn cron_endpoint_drafts_the_daily_topic() {
    let post_text = json!({ "title": "Dzienny wpis" }).to_string();
    let h = harness(Ok(post_envelope(&post_text)), Ok(json!({})));

    let request = Request::builder()
        .method("POST")
        .uri("/cron-generate-daily-post")
        .body(Body::empty())
        .expect("valid request");
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Dzienny wpis");
    assert_eq!(h.text_calls.load(Ordering::SeqCst), 1);

    let prompts = h.prompts.lock().expect("prompt log lock");
    assert!(prompts[0].contains("sztuczna inteligencja"));
    assert!(prompts[0].contains("ekspercki"));
}

#[tokio::test]
async fn suggestion_stubs_ignore_the_request_body() {
    for uri in ["/generate-audience", "/generate-keywords"] {
        let h = harness(Ok(json!({})), Ok(json!({})));
        let request = post_json(uri, json!({ "topic": "cokolwiek" }));
        let response = h.router.oneshot(request).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = body_json(response).await;
        assert!(
            body["suggestions"].as_str().expect("suggestions").len() > 0,
            "{uri}"
        );
        assert_eq!(h.text_calls.load(Ordering::SeqCst), 0, "{uri}");
    }
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let h = harness(Ok(json!({})), Ok(json!({})));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("valid request");
    let response = h.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "status": "healthy" }));
}

//! Tests for decoding the image generation payload.

use blogsmith_error::ImageErrorKind;
use blogsmith_models::images::decode_image_url;
use serde_json::json;

#[test]
fn extracts_first_url() {
    let raw = json!({
        "created": 1700000000,
        "data": [
            { "url": "https://images.example.com/one.png" },
            { "url": "https://images.example.com/two.png" }
        ]
    });

    let url = decode_image_url(&raw).expect("payload with data decodes");
    assert_eq!(url, "https://images.example.com/one.png");
}

#[test]
fn empty_data_preserves_payload() {
    let raw = json!({ "created": 1700000000, "data": [] });

    let err = decode_image_url(&raw).expect_err("empty data fails");
    match err.kind {
        ImageErrorKind::Empty { raw: kept } => assert_eq!(kept, raw),
        other => panic!("expected empty payload error, got: {:?}", other),
    }
}

#[test]
fn missing_data_preserves_payload() {
    let raw = json!({ "error": { "message": "content policy violation" } });

    let err = decode_image_url(&raw).expect_err("missing data fails");
    assert!(matches!(err.kind, ImageErrorKind::Empty { .. }));
}

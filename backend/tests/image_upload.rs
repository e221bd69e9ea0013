//! HTTP behaviour of `POST /post-image`.

mod support;

use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use people_api::api::AppState;
use people_api::api::shaping::CredentialPolicy;
use people_api::domain::KnownIds;
use rstest::rstest;
use serde_json::{Value, json};
use support::{code_for, init_app};

const BOUNDARY: &str = "people-api-test-boundary";

fn multipart_body(field: &str, filename: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload(body: Vec<u8>) -> TestRequest {
    TestRequest::post()
        .uri("/post-image")
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[rstest]
#[case(0, 0.0)]
#[case(1024, 1.0)]
#[case(12_646, 12.35)]
#[actix_web::test]
async fn reports_upload_metadata(#[case] len: usize, #[case] size_kb: f64) {
    let app = init_app(AppState::default()).await;
    let body = multipart_body("image", "cat.png", "image/png", &vec![7u8; len]);
    let res = test::call_service(&app, upload(body).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["filename"], json!("cat.png"));
    assert_eq!(body["content_type"], json!("image/png"));
    let reported = body["size_kb"].as_f64().expect("numeric size");
    assert!((reported - size_kb).abs() < 1e-9, "{reported} != {size_kb}");
}

#[actix_web::test]
async fn missing_image_field_is_reported() {
    let app = init_app(AppState::default()).await;
    let body = multipart_body("avatar", "cat.png", "image/png", b"data");
    let res = test::call_service(&app, upload(body).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(code_for(&body, "image"), Some("missing_field"));
}

#[actix_web::test]
async fn non_multipart_body_is_rejected() {
    let app = init_app(AppState::default()).await;
    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/post-image")
            .set_json(json!({ "image": "cat.png" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"], json!({ "code": "malformed_body" }));
}

#[actix_web::test]
async fn oversize_upload_is_rejected() {
    let state = AppState::new(KnownIds::default(), CredentialPolicy::Echo, 256);
    let app = init_app(state).await;
    let body = multipart_body("image", "big.png", "image/png", &[0u8; 1024]);
    let res = test::call_service(&app, upload(body).to_request()).await;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("payload_too_large"));
    assert_eq!(body["details"], json!({ "limit": 256 }));
}

//! Gateway contract tests: payload negotiation, auth header handling, and
//! error normalization against a mock service.

use std::sync::{Arc, Mutex};

use axum::http::{StatusCode, header};
use axum::response::Json;
use axum::routing::get;
use axum::{Router, http::HeaderMap};
use serde_json::json;

use scrutin_client::{ApiClient, ApiConfig, GatewayError, Payload, RequestOptions, SessionStore};
use scrutin_integration_tests::TestService;

/// Shared slot recording the Authorization header the mock service saw.
type SeenAuth = Arc<Mutex<Option<Option<String>>>>;

fn auth_recording_router(seen: SeenAuth) -> Router {
    Router::new().route(
        "/probe",
        get(move |headers: HeaderMap| {
            let seen = Arc::clone(&seen);
            async move {
                let auth = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                *seen.lock().expect("lock") = Some(auth);
                Json(json!({}))
            }
        }),
    )
}

#[tokio::test]
async fn successful_json_response_is_returned_unchanged() {
    let body = json!({"id": 5, "title": "Lunch", "options": [{"id": 1, "text": "Yes"}]});
    let reply = body.clone();
    let service = TestService::spawn(Router::new().route(
        "/surveys/5",
        get(move || {
            let reply = reply.clone();
            async move { Json(reply) }
        }),
    ))
    .await;

    let payload = service
        .api()
        .request("/surveys/5", RequestOptions::get(false))
        .await
        .expect("request succeeds");

    assert_eq!(payload, Payload::Json(body));
}

#[tokio::test]
async fn non_json_response_resolves_to_text() {
    let service =
        TestService::spawn(Router::new().route("/ping", get(|| async { "pong" }))).await;

    let payload = service
        .api()
        .request("/ping", RequestOptions::get(false))
        .await
        .expect("request succeeds");

    assert_eq!(payload, Payload::Text("pong".to_string()));
}

#[tokio::test]
async fn malformed_json_body_falls_back_to_empty_object() {
    let service = TestService::spawn(Router::new().route(
        "/broken",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{not json") }),
    ))
    .await;

    let payload = service
        .api()
        .request("/broken", RequestOptions::get(false))
        .await
        .expect("request succeeds despite malformed body");

    assert_eq!(payload, Payload::Json(json!({})));
}

#[tokio::test]
async fn error_json_with_detail_surfaces_detail() {
    let service = TestService::spawn(Router::new().route(
        "/forbidden",
        get(|| async { (StatusCode::FORBIDDEN, Json(json!({"detail": "admins only"}))) }),
    ))
    .await;

    let err = service
        .api()
        .request("/forbidden", RequestOptions::get(false))
        .await
        .expect_err("must fail");

    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "admins only");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_json_without_detail_surfaces_serialized_body() {
    let service = TestService::spawn(Router::new().route(
        "/boom",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "nope"}))) }),
    ))
    .await;

    let err = service
        .api()
        .request("/boom", RequestOptions::get(false))
        .await
        .expect_err("must fail");

    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, r#"{"error":"nope"}"#);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_with_empty_text_body_surfaces_http_status() {
    let service = TestService::spawn(Router::new().route(
        "/missing",
        get(|| async { (StatusCode::NOT_FOUND, "") }),
    ))
    .await;

    let err = service
        .api()
        .request("/missing", RequestOptions::get(false))
        .await
        .expect_err("must fail");

    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "HTTP 404");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_with_text_body_surfaces_raw_text() {
    let service = TestService::spawn(Router::new().route(
        "/teapot",
        get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }),
    ))
    .await;

    let err = service
        .api()
        .request("/teapot", RequestOptions::get(false))
        .await
        .expect_err("must fail");

    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 418);
            assert_eq!(message, "short and stout");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn auth_without_stored_token_sends_no_header() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let service = TestService::spawn(auth_recording_router(Arc::clone(&seen))).await;

    // No session seeded: auth=true must not fail, and no header goes out
    service
        .api()
        .request("/probe", RequestOptions::get(true))
        .await
        .expect("missing token is not an error");

    let observed = seen.lock().expect("lock").clone().expect("handler ran");
    assert_eq!(observed, None);
}

#[tokio::test]
async fn auth_with_stored_token_sends_bearer_header() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let service = TestService::spawn(auth_recording_router(Arc::clone(&seen))).await;
    service.seed_session("abc");

    service
        .api()
        .request("/probe", RequestOptions::get(true))
        .await
        .expect("request succeeds");

    let observed = seen.lock().expect("lock").clone().expect("handler ran");
    assert_eq!(observed.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn anonymous_request_sends_no_header_even_with_token() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let service = TestService::spawn(auth_recording_router(Arc::clone(&seen))).await;
    service.seed_session("abc");

    service
        .api()
        .request("/probe", RequestOptions::get(false))
        .await
        .expect("request succeeds");

    let observed = seen.lock().expect("lock").clone().expect("handler ran");
    assert_eq!(observed, None);
}

#[tokio::test]
async fn transport_failure_yields_fixed_message() {
    // Grab a port nobody is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let dir = tempfile::tempdir().expect("tempdir");
    let config = ApiConfig::new(
        format!("http://{addr}").parse().expect("valid url"),
        dir.path().join("session.json"),
    );
    let store = SessionStore::new(dir.path().join("session.json"));
    let api = ApiClient::new(&config, store).expect("client builds");

    let err = api
        .request("/surveys", RequestOptions::get(false))
        .await
        .expect_err("must fail");

    assert!(matches!(err, GatewayError::Unreachable));
    assert_eq!(err.to_string(), "backend unreachable");
}

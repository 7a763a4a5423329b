//! Profile, user search, comment forum, and admin role tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query};
use axum::http::{StatusCode, header};
use axum::response::Json;
use axum::routing::{get, patch, post};
use axum::{Router, http::HeaderMap};
use serde_json::json;

use scrutin_client::{GatewayError, admin, comments, users};
use scrutin_core::{SurveyId, UserId};
use scrutin_integration_tests::TestService;

#[tokio::test]
async fn me_requires_and_sends_bearer_token() {
    let router = Router::new().route(
        "/users/me",
        get(|headers: HeaderMap| async move {
            if headers.get(header::AUTHORIZATION).is_some() {
                (
                    StatusCode::OK,
                    Json(json!({
                        "username": "bob",
                        "email": "bob@example.com",
                        "is_admin": false,
                        "profile_public": true
                    })),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"detail": "Not authenticated"})),
                )
            }
        }),
    );
    let service = TestService::spawn(router).await;
    service.seed_session("abc");

    let profile = users::me(&service.api()).await.expect("me succeeds");
    assert_eq!(profile.username, "bob");
    assert!(profile.profile_public);
}

#[tokio::test]
async fn me_without_session_surfaces_api_error() {
    let router = Router::new().route(
        "/users/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Not authenticated"})),
            )
        }),
    );
    let service = TestService::spawn(router).await;

    let err = users::me(&service.api()).await.expect_err("must fail");
    assert!(matches!(err, GatewayError::Api { status: 401, .. }));
}

#[tokio::test]
async fn search_percent_encodes_the_query() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let seen_handler = Arc::clone(&seen);

    let router = Router::new().route(
        "/users/search",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = Arc::clone(&seen_handler);
            async move {
                *seen.lock().expect("lock") = params.get("q").cloned();
                Json(json!([{"username": "bob marley"}]))
            }
        }),
    );
    let service = TestService::spawn(router).await;

    let hits = users::search(&service.api(), "bob marley")
        .await
        .expect("search succeeds");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].username, "bob marley");
    // The space survived the round trip through percent-encoding
    assert_eq!(
        seen.lock().expect("lock").as_deref(),
        Some("bob marley")
    );
}

#[tokio::test]
async fn comments_list_decodes() {
    let router = Router::new().route(
        "/surveys/5/comments",
        get(|| async {
            Json(json!([
                {"user_id": 1, "content": "first"},
                {"user_id": 2, "content": "second"}
            ]))
        }),
    );
    let service = TestService::spawn(router).await;

    let all = comments::list(&service.api(), SurveyId::new(5))
        .await
        .expect("list succeeds");

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].user_id, UserId::new(1));
    assert_eq!(all[1].content, "second");
}

#[tokio::test]
async fn comment_post_sends_token_and_content() {
    let received: Arc<Mutex<Option<(Option<String>, serde_json::Value)>>> =
        Arc::new(Mutex::new(None));
    let received_handler = Arc::clone(&received);

    let router = Router::new().route(
        "/surveys/5/comments",
        post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
            let received = Arc::clone(&received_handler);
            async move {
                let auth = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                *received.lock().expect("lock") = Some((auth, body));
                (StatusCode::CREATED, Json(json!({"ok": true})))
            }
        }),
    );
    let service = TestService::spawn(router).await;
    service.seed_session("abc");

    comments::post(&service.api(), SurveyId::new(5), "I voted pizza")
        .await
        .expect("post succeeds");

    let (auth, body) = received.lock().expect("lock").clone().expect("handler ran");
    assert_eq!(auth.as_deref(), Some("Bearer abc"));
    assert_eq!(body["content"], "I voted pizza");
}

#[tokio::test]
async fn set_role_patches_with_query_flag() {
    let seen: Arc<Mutex<Option<(String, HashMap<String, String>, bool)>>> =
        Arc::new(Mutex::new(None));
    let seen_handler = Arc::clone(&seen);

    let router = Router::new().route(
        "/admin/users/{id}/role",
        patch(
            move |Path(id): Path<String>,
                  Query(params): Query<HashMap<String, String>>,
                  headers: HeaderMap| {
                let seen = Arc::clone(&seen_handler);
                async move {
                    let authed = headers.contains_key(header::AUTHORIZATION);
                    *seen.lock().expect("lock") = Some((id, params, authed));
                    Json(json!({"ok": true}))
                }
            },
        ),
    );
    let service = TestService::spawn(router).await;
    service.seed_session("abc");

    admin::set_role(&service.api(), UserId::new(3), true)
        .await
        .expect("set_role succeeds");

    let (id, params, authed) = seen.lock().expect("lock").clone().expect("handler ran");
    assert_eq!(id, "3");
    assert_eq!(params.get("is_admin").map(String::as_str), Some("true"));
    assert!(authed);
}

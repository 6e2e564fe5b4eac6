// ==============================
// tests/unit/middleware_tests.rs
// ==============================
//! Unit tests for the session gate wired into the full router
use crate::test_utils::*;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use mediagate_common::routes;
use tower::ServiceExt;

#[tokio::test]
async fn test_every_protected_route_is_gated() {
    let env = setup_test_env();

    for (method, uri) in [
        (Method::GET, routes::HOME),
        (Method::GET, "/static/app.css"),
        (Method::POST, routes::UPLOAD),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = env.app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}

#[tokio::test]
async fn test_public_routes_need_no_session() {
    let env = setup_test_env();

    let response = env
        .app
        .clone()
        .oneshot(get_with_cookie(routes::ROOT, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = env
        .app
        .clone()
        .oneshot(login_request(r#"{"password":"abc123"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_swept_session_is_rejected() {
    let env = setup_test_env();
    let session = env.state.sessions.create().await;

    let response = env
        .app
        .clone()
        .oneshot(get_with_cookie(routes::HOME, Some(&session.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A sweep past the expiry evicts it, after which the gate closes
    let later = session.expires_at + chrono::Duration::seconds(1);
    assert_eq!(env.state.sessions.purge_expired(later).await, 1);

    let response = env
        .app
        .clone()
        .oneshot(get_with_cookie(routes::HOME, Some(&session.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

//! Uploads through the session gate
use crate::test_utils::*;
use axum::http::{header, StatusCode};
use mediagate_common::UPLOAD_FIELD;
use std::fs;
use tower::ServiceExt;

#[tokio::test]
async fn test_upload_without_session_never_reaches_disk() {
    let env = setup_test_env();

    let response = env
        .app
        .clone()
        .oneshot(multipart_request(None, UPLOAD_FIELD, "clip.mp4", b"video bytes"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(env.media_files().is_empty());

    let response = env
        .app
        .clone()
        .oneshot(multipart_request(
            Some("not-a-session"),
            UPLOAD_FIELD,
            "clip.mp4",
            b"video bytes",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(env.media_files().is_empty());
}

#[tokio::test]
async fn test_upload_with_session_is_persisted() {
    let env = setup_test_env();
    let session = env.state.sessions.create().await;

    let response = env
        .app
        .clone()
        .oneshot(multipart_request(
            Some(&session.id),
            UPLOAD_FIELD,
            "clip.MP4",
            b"video bytes",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
    assert_eq!(body_string(response).await, "File uploaded!");

    let files = env.media_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().unwrap(), "mp4");
    assert_eq!(fs::read(&files[0]).unwrap(), b"video bytes");
}

#[tokio::test]
async fn test_upload_without_video_field_is_not_found() {
    let env = setup_test_env();
    let session = env.state.sessions.create().await;

    let response = env
        .app
        .clone()
        .oneshot(multipart_request(
            Some(&session.id),
            "somethingElse",
            "clip.mp4",
            b"video bytes",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(env.media_files().is_empty());
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let env = setup_test_env_with(|settings| settings.max_upload_bytes = 64);
    let session = env.state.sessions.create().await;

    let response = env
        .app
        .clone()
        .oneshot(multipart_request(
            Some(&session.id),
            UPLOAD_FIELD,
            "clip.mp4",
            &[7u8; 4096],
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
    assert!(env
        .media_files()
        .iter()
        .all(|path| fs::metadata(path).map(|m| m.len() < 4096).unwrap_or(true)));
}

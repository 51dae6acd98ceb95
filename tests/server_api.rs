//! Tests for the /api/ascii/ endpoint.

mod common;

use axum::http::StatusCode;
use ascii_edge::server::AppState;
use common::fixtures::{split_png, Multipart};
use common::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_convert_with_width() {
    let app = TestApp::new();
    let form = Multipart::new()
        .file("image", "split.png", &split_png(80, 40, 40))
        .text("width", "40");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::OK);
    let ascii = response.ascii();
    let rows: Vec<&str> = ascii.split('\n').collect();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| r.chars().count() == 40));
    assert!(rows.iter().all(|r| r.starts_with('@') && r.ends_with(' ')));
}

#[tokio::test]
async fn test_width_defaults_to_100() {
    let app = TestApp::new();
    let form = Multipart::new().file("image", "split.png", &split_png(200, 100, 100));

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::OK);
    let ascii = response.ascii();
    assert_eq!(ascii.split('\n').count(), 50);
    assert!(ascii.split('\n').all(|r| r.chars().count() == 100));
}

#[tokio::test]
async fn test_path_without_trailing_slash() {
    let app = TestApp::new();
    let form = Multipart::new().file("image", "split.png", &split_png(10, 10, 5));
    let response = app.post_multipart("/api/ascii", form).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_image() {
    let app = TestApp::new();
    let form = Multipart::new().text("width", "50");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "No image uploaded");
}

#[tokio::test]
async fn test_image_field_without_file_is_missing() {
    let app = TestApp::new();
    let form = Multipart::new().text("image", "hello");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "No image uploaded");
}

#[tokio::test]
async fn test_undecodable_upload_returns_sentinel() {
    let app = TestApp::new();
    let form = Multipart::new().file("image", "notes.txt", b"not an image");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ascii(), "Invalid image.");
}

#[tokio::test]
async fn test_empty_upload_returns_sentinel() {
    let app = TestApp::new();
    let form = Multipart::new().file("image", "empty.png", b"");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ascii(), "Invalid image.");
}

#[tokio::test]
async fn test_invalid_widths() {
    let app = TestApp::new();
    for width in ["abc", "0", "-3", "1.5", ""] {
        let form = Multipart::new()
            .file("image", "split.png", &split_png(10, 10, 5))
            .text("width", width);

        let response = app.post_multipart("/api/ascii/", form).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "width {:?}", width);
        assert_eq!(response.error(), "Invalid width");
    }
}

#[tokio::test]
async fn test_width_above_maximum() {
    let app = TestApp::new();
    let form = Multipart::new()
        .file("image", "split.png", &split_png(10, 10, 5))
        .text("width", "501");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Width exceeds maximum of 500");
}

#[tokio::test]
async fn test_not_multipart() {
    let app = TestApp::new();
    let response = app
        .post_raw("/api/ascii/", "application/json", b"{}".to_vec())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().starts_with("Malformed multipart request"));
}

#[tokio::test]
async fn test_upload_over_body_limit() {
    let app = TestApp::with_state(AppState {
        max_upload_bytes: 1024,
        ..AppState::default()
    });
    let form = Multipart::new().file("image", "big.bin", &vec![0u8; 8 * 1024]);

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().starts_with("Malformed multipart request"));
}

#[tokio::test]
async fn test_configured_tonal_mode() {
    use ascii_edge::ascii::{RenderMode, RenderOptions};

    let app = TestApp::with_state(AppState {
        options: RenderOptions {
            mode: RenderMode::Tonal,
            ..RenderOptions::default()
        },
        ..AppState::default()
    });
    let form = Multipart::new()
        .file("image", "split.png", &split_png(20, 10, 10))
        .text("width", "20");

    let response = app.post_multipart("/api/ascii/", form).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.ascii().contains('/'));
}

//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct
//! status code and an empty body. They do NOT need an HTTP server -- they
//! call `IntoResponse` directly on `AppError` values.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use dolls_api::error::AppError;
use dolls_db::gateway::StoreError;

/// Helper: convert an `AppError` into its status code and raw body bytes.
async fn error_to_response(err: AppError) -> (StatusCode, Vec<u8>) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let (status, body) = error_to_response(AppError::NotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty(), "failures are status-code-only");
}

#[tokio::test]
async fn bad_path_maps_to_400() {
    let (status, body) = error_to_response(AppError::BadPath).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn decode_failure_maps_to_400() {
    let (status, body) = error_to_response(AppError::Decode).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn write_rejected_maps_to_400_even_on_timeout() {
    // Store failures on the write path surface as 400, not 500; the
    // mapping is per operation, not per error kind.
    let err = AppError::WriteRejected(StoreError::Timeout(Duration::from_secs(3)));
    let (status, body) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn read_path_timeout_maps_to_500() {
    let err = AppError::Store(StoreError::Timeout(Duration::from_secs(3)));
    let (status, body) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn read_path_backend_failure_maps_to_500() {
    let err = AppError::Store(StoreError::Backend(sqlx::Error::PoolTimedOut));
    let (status, body) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

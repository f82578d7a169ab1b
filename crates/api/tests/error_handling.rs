//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use domus_api::error::AppError;
use domus_core::error::CoreError;
use domus_db::StoreError;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Professor",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Professor with id 42 not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn validation_error_returns_400_with_field() {
    let err = AppError::Core(CoreError::validation("price", "must not be negative"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "price");
    assert_eq!(json["error"], "must not be negative");
}

#[tokio::test]
async fn unique_violation_returns_409_with_field() {
    let err = AppError::Core(CoreError::UniqueViolation {
        entity: "Professor",
        field: "email",
        message: "email already registered".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["field"], "email");
}

#[tokio::test]
async fn cascade_failure_returns_500() {
    let err = AppError::Core(CoreError::CascadeDelete {
        entity: "Category",
        id: 3,
        message: "2 dependent rows remain in products".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "CASCADE_DELETE_FAILED");
}

#[tokio::test]
async fn internal_error_sanitizes_message() {
    let err = AppError::InternalError("disk path /var/secret".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn store_errors_convert() {
    let err: AppError = StoreError::Database(sqlx::Error::RowNotFound).into();
    let (status, _) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let err: AppError = StoreError::Core(CoreError::validation("name", "must not be empty")).into();
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["field"], "name");
}

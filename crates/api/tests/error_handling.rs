//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bloqit_api::error::AppError;
use bloqit_core::error::CoreError;
use bloqit_core::validation::FieldViolation;
use bloqit_db::{Collection, RepoError, StoreError};
use http_body_util::BodyExt;
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Locker",
        id: "L9".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Locker not found"}));
}

#[tokio::test]
async fn validation_error_returns_violation_object() {
    let violation = FieldViolation::invalid_type(vec!["isOccupied".into()], "boolean", "string");
    let err = AppError::Core(CoreError::Validation(violation));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({"error": {
            "code": "invalid_type",
            "expected": "boolean",
            "received": "string",
            "message": "Expected boolean, received string",
            "path": ["isOccupied"],
        }})
    );
}

#[tokio::test]
async fn immutable_field_error_returns_400() {
    let err = AppError::Core(CoreError::ImmutableField { field: "facilityId" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Updating facilityId is not allowed"}));
}

#[tokio::test]
async fn integrity_error_returns_400_not_404() {
    let err = AppError::Core(CoreError::Integrity {
        entity: "Bloq",
        id: "F9".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Bloq not found"}));
}

// ---------------------------------------------------------------------------
// Internal errors are sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("record shape drifted".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "An internal error occurred"}));
}

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::Read {
        collection: Collection::Rents,
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/secret/path"),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"error": "An internal error occurred"}));
}

#[tokio::test]
async fn malformed_collection_does_not_leak_parser_detail() {
    let source = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
    let err = AppError::Store(StoreError::Malformed {
        collection: Collection::Lockers,
        source,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("lockers"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("body is not JSON".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "body is not JSON"}));
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn repo_error_converts_to_matching_variant() {
    let core = RepoError::Core(CoreError::ImmutableField { field: "lockerId" });
    assert_matches!(
        AppError::from(core),
        AppError::Core(CoreError::ImmutableField { field: "lockerId" })
    );

    let store = RepoError::Store(StoreError::Write {
        collection: Collection::Facilities,
        source: std::io::Error::other("disk full"),
    });
    assert_matches!(AppError::from(store), AppError::Store(StoreError::Write { .. }));
}

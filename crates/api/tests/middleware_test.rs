mod common;

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use logtrack_api::middleware::{auth, error_handling::map_error};
use logtrack_core::errors::LogError;
use tower_http::timeout::TimeoutLayer;

const AUTHORIZATION: HeaderName = HeaderName::from_static("authorization");

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = LogError::NotFound("Logbook not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = LogError::Validation("Please fill in all fields".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = LogError::Conflict("Log already exists".to_string());

    // Duplicates surface as a 400, matching the validation family
    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = LogError::Authentication("Authentication failed".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = LogError::Authorization("Access denied".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = LogError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = LogError::Internal("mail relay unreachable".into());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // The hash is salted PHC output, never the raw password
    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));

    assert!(auth::verify_password(password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());
}

#[tokio::test]
async fn test_request_without_token_is_unauthorized() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/api/logbooks/admin/logbooks").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_request_with_garbage_token_is_unauthorized() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .get("/api/logbooks/admin/logbooks")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_static("Bearer not-a-real-token"),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_request_with_non_bearer_scheme_is_unauthorized() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .get("/api/logbooks/admin/logbooks")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_student_token_on_supervisor_route_is_forbidden() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server
        .get("/api/logbooks/admin/logbooks")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&common::bearer("student")).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_token_on_supervisor_count_route_is_forbidden() {
    let server = TestServer::new(common::test_app()).unwrap();

    for path in [
        "/api/logbooks/admin/logbooks/total",
        "/api/logbooks/admin/logbooks/approved",
        "/api/logbooks/admin/logbooks/unapproved",
    ] {
        let response = server
            .get(path)
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&common::bearer("student")).unwrap(),
            )
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn test_student_token_on_approve_route_is_forbidden() {
    let server = TestServer::new(common::test_app()).unwrap();

    // The role gate runs before any payload handling
    let response = server
        .put(&format!(
            "/api/logbooks/admin/logbook/approve/{}",
            uuid::Uuid::new_v4()
        ))
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&common::bearer("student")).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request_not_internal_error() {
    let server = TestServer::new(common::test_app()).unwrap();

    for path in [
        "/api/daily-logs/not-a-uuid",
        "/api/daily-logs/daily-log/42",
        "/api/logbooks/logbook/xyz",
        "/api/logbooks/logbook/pdf/123",
    ] {
        let response = server
            .get(path)
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&common::bearer("student")).unwrap(),
            )
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_health_endpoint_is_public() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_timeout_layer_passes_requests_within_budget() {
    // Same layering as the server assembly; the layered router must still
    // serve ordinary requests.
    let app = common::test_app().layer(TimeoutLayer::new(Duration::from_secs(5)));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
}

//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Logtrack
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Validation and conflict failures carry their message to the caller.
//! Database and internal failures are logged server-side and surfaced as a
//! generic 500 with no detail leaked.

use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use logtrack_core::errors::LogError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `LogError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub LogError);

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            LogError::NotFound(_) => StatusCode::NOT_FOUND,
            LogError::Validation(_) => StatusCode::BAD_REQUEST,
            LogError::Conflict(_) => StatusCode::BAD_REQUEST,
            LogError::Authentication(_) => StatusCode::UNAUTHORIZED,
            LogError::Authorization(_) => StatusCode::FORBIDDEN,
            LogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Unexpected failures are logged with context and replaced by a
        // generic message so no store or service detail reaches the caller.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self.0);
            "Internal Server Error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from LogError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, LogError>` in handler functions that return `Result<T, AppError>`.
impl From<LogError> for AppError {
    fn from(err: LogError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Wraps the eyre error in a `LogError::Database` variant so repository
/// failures can propagate with `?`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(LogError::Database(err))
    }
}

/// Maps a LogError to an HTTP response
pub fn map_error(err: LogError) -> Response {
    AppError(err).into_response()
}

/// JSON body extractor that rejects through the service's own error mapping.
///
/// Axum's stock `Json` rejection answers a missing or malformed body with a
/// 422; a body with an absent required field is the same class of caller
/// mistake as an empty field, so both surface as a 400 validation error.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError(LogError::Validation(rejection.body_text())))?;

        Ok(ValidJson(value))
    }
}

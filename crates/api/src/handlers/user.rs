use axum::{Json, extract::State};
use eyre::Result;
use logtrack_core::{
    errors::LogError,
    models::{
        MessageResponse,
        user::{LoginRequest, LoginResponse, RegisterRequest, Role, UserResponse},
    },
};
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{
        auth,
        error_handling::{AppError, ValidJson},
    },
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
        || payload.department.trim().is_empty()
    {
        return Err(AppError(LogError::Validation(
            "Please fill in all fields".to_string(),
        )));
    }

    // Check if the email is already taken
    let existing = logtrack_db::repositories::member::get_member_by_email(
        &state.db_pool,
        &payload.email,
    )
    .await
    .map_err(LogError::Database)?;

    if existing.is_some() {
        return Err(AppError(LogError::Conflict(
            "User already exists".to_string(),
        )));
    }

    let password_hash =
        auth::hash_password(&payload.password).map_err(|e| LogError::Internal(e.into()))?;

    // New accounts are always students; supervisors are provisioned out of band.
    // The unique index on email backstops the read check above against races.
    logtrack_db::repositories::member::create_member(
        &state.db_pool,
        &payload.name,
        &payload.email,
        &password_hash,
        &payload.department,
        Role::Student.as_str(),
    )
    .await
    .map_err(|e| {
        if logtrack_db::is_unique_violation(&e) {
            LogError::Conflict("User already exists".to_string())
        } else {
            LogError::Database(e)
        }
    })?;

    Ok(Json(MessageResponse::new("User created successfully")))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if payload.email.trim().is_empty()
        || payload.password.is_empty()
        || payload.department.trim().is_empty()
    {
        return Err(AppError(LogError::Validation(
            "Please fill in all fields".to_string(),
        )));
    }

    // The member must exist within the stated department
    let member = logtrack_db::repositories::member::get_member_by_email_and_department(
        &state.db_pool,
        &payload.email,
        &payload.department,
    )
    .await
    .map_err(LogError::Database)?
    .ok_or_else(|| {
        LogError::Authentication(
            "Invalid credentials. User does not belong to this department".to_string(),
        )
    })?;

    let is_valid =
        auth::verify_password(&payload.password, &member.password_hash).map_err(LogError::Database)?;

    if !is_valid {
        return Err(AppError(LogError::Authentication(
            "Invalid credentials".to_string(),
        )));
    }

    let token = auth::create_token(member.id, &member.email, &member.role, &state.jwt_secret)
        .map_err(|e| LogError::Internal(e.into()))?;

    let response = LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserResponse {
            id: member.id,
            name: member.name,
            email: member.email,
            department: member.department,
            role: member.role,
        },
    };

    Ok(Json(response))
}

//! # Authentication Module
//!
//! This module provides authentication utilities for the Logtrack API:
//! password hashing and verification with Argon2, JWT issuance and
//! validation, and request-scoped extractors that gate routes on a valid
//! bearer token and, where required, on the supervisor role.
//!
//! Claims always travel through the [`AuthUser`] and [`SupervisorUser`]
//! extractors; no handler reads ambient or global session state.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use eyre::Result;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use logtrack_core::{
    errors::LogError,
    models::user::Role,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Bearer tokens expire one day after issuance.
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims carried in every Logtrack bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member id
    pub id: Uuid,
    /// Member email
    pub email: String,
    /// Member role (`student` or `supervisor`)
    pub role: String,
    /// Issued-at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn new(id: Uuid, email: impl Into<String>, role: impl Into<String>) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(TOKEN_EXPIRY_HOURS);

        Self {
            id,
            email: email.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn is_supervisor(&self) -> bool {
        self.role == Role::Supervisor.as_str()
    }
}

/// Hashes a password using the Argon2 algorithm
///
/// A fresh random salt is generated per password and the result is returned
/// in PHC string format.
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored PHC hash string.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

/// Issues a signed HS256 token carrying the member's id, email and role.
pub fn create_token(id: Uuid, email: &str, role: &str, secret: &str) -> Result<String> {
    let claims = Claims::new(id, email, role);

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Validates a token's signature and expiry and returns its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, LogError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| LogError::Authentication("Authentication failed".to_string()))?;

    Ok(token_data.claims)
}

/// Extracts the bearer token from an `Authorization` header value.
fn bearer_token(parts: &Parts) -> Result<&str, LogError> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| LogError::Authentication("Access denied".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| LogError::Authentication("Access denied".to_string()))
}

/// Request guard for any authenticated member.
///
/// Rejects with 401 when the bearer token is absent, malformed, expired, or
/// fails signature verification.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = decode_token(token, &state.jwt_secret)?;

        Ok(AuthUser(claims))
    }
}

/// Request guard for supervisor-only routes.
///
/// Rejects with 401 on a bad token and 403 when the role claim is not
/// `supervisor`, regardless of payload validity.
#[derive(Debug, Clone)]
pub struct SupervisorUser(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for SupervisorUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if !claims.is_supervisor() {
            return Err(AppError(LogError::Authorization(
                "Access denied".to_string(),
            )));
        }

        Ok(SupervisorUser(claims))
    }
}

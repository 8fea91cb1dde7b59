use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{generate_jwt, password, Claims};
use crate::client;
use crate::config;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
    pub expires_in: i64,
}

/// POST /auth/login - Authenticate staff credentials and receive a JWT
///
/// Looks the user up in the system of record, verifies the password against
/// its bcrypt hash and issues a session token carrying the role claim.
pub async fn login(Json(payload): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let user = client::user_by_username(&payload.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !user.is_active {
        return Err(ApiError::forbidden("Account is inactive"));
    }

    // Accounts provisioned through an external identity provider have no
    // local hash and cannot use password login
    let hash = user
        .password
        .as_deref()
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !password::verify_password(&payload.password, hash)? {
        tracing::warn!(username = %payload.username, "failed login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(user.id, user.username.clone(), user.role.clone());
    let token = generate_jwt(claims)?;

    let expires_in = config::config().security.jwt_expiry_hours as i64 * 3600;

    Ok(ApiResponse::success(LoginResponse {
        token,
        user: SessionUser {
            id: user.id,
            username: user.username,
            role: user.role,
        },
        expires_in,
    }))
}

use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::client;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{Page, User};
use crate::types::Role;

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub password: String,
    pub role: String,
}

/// GET /api/admin/users - staff roster (password hashes never serialize out)
pub async fn user_list() -> ApiResult<Page<User>> {
    let page = client::users().list().await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/admin/users/:id
pub async fn user_get(Path(id): Path<i64>) -> ApiResult<User> {
    let user = client::users().get(id).await?;
    Ok(ApiResponse::success(user))
}

/// POST /api/admin/users - create a staff account with a hashed password
pub async fn user_create(Json(payload): Json<CreateUser>) -> ApiResult<User> {
    if Role::parse(&payload.role).is_none() {
        return Err(ApiError::bad_request(format!("Unknown role '{}'", payload.role)));
    }

    let hash = password::hash_password(&payload.password)?;
    let body = json!({
        "username": payload.username,
        "email": payload.email,
        "first_name": payload.first_name,
        "last_name": payload.last_name,
        "password": hash,
        "role": payload.role,
        "is_active": true,
    });

    let created = client::users().create(&body).await?;
    tracing::info!(username = %created.username, "staff account created");
    Ok(ApiResponse::created(created))
}

/// PATCH /api/admin/users/:id - partial update; a plaintext `password` field
/// is replaced with its hash before the record leaves this service
pub async fn user_update(Path(id): Path<i64>, Json(mut body): Json<Value>) -> ApiResult<User> {
    if let Some(role) = body.get("role").and_then(|r| r.as_str()) {
        if Role::parse(role).is_none() {
            return Err(ApiError::bad_request(format!("Unknown role '{}'", role)));
        }
    }

    if let Some(plaintext) = body.get("password").and_then(|p| p.as_str()) {
        let hash = password::hash_password(plaintext)?;
        body["password"] = Value::String(hash);
    }

    let updated = client::users().update(id, &body).await?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/admin/users/:id
pub async fn user_delete(Path(id): Path<i64>) -> ApiResult<()> {
    client::users().destroy(id).await?;
    Ok(ApiResponse::<()>::no_content())
}

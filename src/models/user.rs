use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slim user reference as embedded in orders, tasks and messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

/// Full staff record from the system of record. The bcrypt `password` hash is
/// only ever read (login verification); it is never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}


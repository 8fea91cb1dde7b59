use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRef;

/// File reference attached to a thread message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Backend file reference (download URL or storage key)
    pub file: String,
    pub name: String,
}

/// One entry in an order's chat thread. Append-only, owned by its order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub body: String,
    pub author: UserRef,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for posting a new message into a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    pub body: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

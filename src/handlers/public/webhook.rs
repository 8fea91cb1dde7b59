use axum::Json;
use serde_json::{json, Value};

use crate::client;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /webhooks/auth - identity-provider user sync events
///
/// The provider posts `{ "type": "user.created", "data": {...} }` style
/// events; relevant ones are forwarded to the system of record so staff
/// records stay in sync. Unknown event types are acknowledged and dropped.
pub async fn auth_event(Json(event): Json<Value>) -> ApiResult<Value> {
    let event_type = event
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("")
        .to_string();

    match event_type.as_str() {
        "user.created" | "user.updated" | "user.deleted" => {
            client::backend()
                .post_json::<Value>("usuarios/eventos/", &event)
                .await?;
            tracing::info!(event = %event_type, "forwarded identity event");
            Ok(ApiResponse::accepted(json!({ "forwarded": true })))
        }
        other => {
            tracing::debug!(event = %other, "ignoring identity event");
            Ok(ApiResponse::success(json!({ "forwarded": false })))
        }
    }
}

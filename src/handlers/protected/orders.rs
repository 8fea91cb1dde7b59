use axum::extract::{Path, Query};
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

use crate::client;
use crate::error::ApiError;
use crate::filter::{filter_orders, OrderFilter};
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{CreateMessage, Message, Order, Page};

/// GET /api/orders - list a snapshot page, filtered in memory
///
/// The backend owns pagination; the filter criteria from the query string are
/// applied to the fetched page, preserving the backend's ordering.
pub async fn order_list(
    Query(paging): Query<super::PageQuery>,
    Query(filter): Query<OrderFilter>,
) -> ApiResult<Page<Order>> {
    let page = match paging.page {
        Some(n) => client::orders().list_page(n).await?,
        None => client::orders().list().await?,
    };
    let results = filter_orders(page.results, &filter);
    let page = Page {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results,
    };
    Ok(ApiResponse::success(page))
}

/// GET /api/orders/:id - order detail with its full message thread
pub async fn order_get(Path(id): Path<i64>) -> ApiResult<Order> {
    let orders_client = client::orders();
    let (mut order, thread) =
        futures::try_join!(orders_client.get(id), client::order_messages(id))?;
    order.messages = thread.results;
    Ok(ApiResponse::success(order))
}

/// POST /api/orders - create an order; the backend owns the write schema
pub async fn order_create(Json(body): Json<Value>) -> ApiResult<Order> {
    let created = client::orders().create(&body).await?;
    Ok(ApiResponse::created(created))
}

/// PATCH /api/orders/:id - partial update (status, priority, assignment);
/// closing an order sets `closed_at` upstream
pub async fn order_update(Path(id): Path<i64>, Json(body): Json<Value>) -> ApiResult<Order> {
    let updated = client::orders().update(id, &body).await?;
    Ok(ApiResponse::success(updated))
}

/// GET /api/orders/:id/messages - the chat thread for an order
pub async fn message_list(Path(id): Path<i64>) -> ApiResult<Page<Message>> {
    let thread = client::order_messages(id).await?;
    Ok(ApiResponse::success(thread))
}

/// POST /api/orders/:id/messages - append to the thread
pub async fn message_post(
    Path(id): Path<i64>,
    Json(message): Json<CreateMessage>,
) -> ApiResult<Message> {
    if message.body.trim().is_empty() && message.attachments.is_empty() {
        let mut field_errors = HashMap::new();
        field_errors.insert(
            "body".to_string(),
            "Message needs a body or at least one attachment".to_string(),
        );
        return Err(ApiError::validation_error("Empty message", Some(field_errors)));
    }

    let body = serde_json::to_value(&message)
        .map_err(|e| ApiError::invalid_json(format!("Unserializable message payload: {}", e)))?;
    let created = client::post_order_message(id, &body).await?;
    Ok(ApiResponse::created(created))
}

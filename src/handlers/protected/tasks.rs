use axum::extract::{Path, Query};
use axum::Json;
use serde_json::Value;

use crate::client;
use crate::filter::{filter_tasks, TaskFilter};
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{Page, Task};

/// GET /api/tasks - list a snapshot page, filtered in memory
pub async fn task_list(
    Query(paging): Query<super::PageQuery>,
    Query(filter): Query<TaskFilter>,
) -> ApiResult<Page<Task>> {
    let page = match paging.page {
        Some(n) => client::tasks().list_page(n).await?,
        None => client::tasks().list().await?,
    };
    let results = filter_tasks(page.results, &filter);
    let page = Page {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results,
    };
    Ok(ApiResponse::success(page))
}

/// GET /api/tasks/:id
pub async fn task_get(Path(id): Path<i64>) -> ApiResult<Task> {
    let task = client::tasks().get(id).await?;
    Ok(ApiResponse::success(task))
}

/// POST /api/tasks
pub async fn task_create(Json(body): Json<Value>) -> ApiResult<Task> {
    let created = client::tasks().create(&body).await?;
    Ok(ApiResponse::created(created))
}

/// PATCH /api/tasks/:id
pub async fn task_update(Path(id): Path<i64>, Json(body): Json<Value>) -> ApiResult<Task> {
    let updated = client::tasks().update(id, &body).await?;
    Ok(ApiResponse::success(updated))
}

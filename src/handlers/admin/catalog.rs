use axum::extract::Path;
use axum::Json;
use serde_json::Value;

use crate::client::{backend, Resource};
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{CatalogModel, Page};

fn resource<T: CatalogModel>() -> Resource<T> {
    Resource::new(backend(), T::PATH)
}

/// Generic CRUD pass-through for the catalog collections (groups, buildings,
/// sectors, tags). One set of handlers, monomorphized per model.
pub async fn list<T: CatalogModel>() -> ApiResult<Page<T>> {
    let page = resource::<T>().list().await?;
    Ok(ApiResponse::success(page))
}

pub async fn get_one<T: CatalogModel>(Path(id): Path<i64>) -> ApiResult<T> {
    let record = resource::<T>().get(id).await?;
    Ok(ApiResponse::success(record))
}

pub async fn create<T: CatalogModel>(Json(body): Json<Value>) -> ApiResult<T> {
    let created = resource::<T>().create(&body).await?;
    Ok(ApiResponse::created(created))
}

pub async fn update<T: CatalogModel>(Path(id): Path<i64>, Json(body): Json<Value>) -> ApiResult<T> {
    let updated = resource::<T>().update(id, &body).await?;
    Ok(ApiResponse::success(updated))
}

pub async fn destroy<T: CatalogModel>(Path(id): Path<i64>) -> ApiResult<()> {
    resource::<T>().destroy(id).await?;
    Ok(ApiResponse::<()>::no_content())
}

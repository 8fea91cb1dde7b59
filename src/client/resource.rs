use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

use crate::models::Page;

use super::{BackendClient, BackendError};

/// Typed view over one paginated collection endpoint. List/get decode into
/// `T`; create/update stay `Value`-shaped pass-throughs because the backend
/// owns the write schema.
pub struct Resource<T> {
    client: &'static BackendClient,
    path: &'static str,
    _phantom: PhantomData<T>,
}

impl<T> Resource<T>
where
    T: DeserializeOwned,
{
    pub fn new(client: &'static BackendClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _phantom: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Page<T>, BackendError> {
        let page_size = crate::config::config().backend.page_size.to_string();
        self.client
            .get_json_query(&format!("{}/", self.path), &[("page_size", &page_size)])
            .await
    }

    pub async fn list_page(&self, page: u32) -> Result<Page<T>, BackendError> {
        let page_size = crate::config::config().backend.page_size.to_string();
        self.client
            .get_json_query(
                &format!("{}/", self.path),
                &[("page", &page.to_string()), ("page_size", &page_size)],
            )
            .await
    }

    pub async fn get(&self, id: i64) -> Result<T, BackendError> {
        self.client.get_json(&format!("{}/{}/", self.path, id)).await
    }

    pub async fn create(&self, body: &Value) -> Result<T, BackendError> {
        self.client.post_json(&format!("{}/", self.path), body).await
    }

    pub async fn update(&self, id: i64, body: &Value) -> Result<T, BackendError> {
        self.client
            .patch_json(&format!("{}/{}/", self.path, id), body)
            .await
    }

    pub async fn destroy(&self, id: i64) -> Result<(), BackendError> {
        self.client.delete(&format!("{}/{}/", self.path, id)).await
    }
}

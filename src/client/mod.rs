//! HTTP client for the external system of record. Every collection this
//! service exposes is a thin typed wrapper over one of its paginated REST
//! endpoints; nothing is persisted locally.

pub mod resource;

use once_cell::sync::Lazy;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config;
use crate::models::{Building, CatalogModel, Group, Message, Order, Page, Sector, Tag, Task, User};
pub use resource::Resource;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
}

pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

impl BackendClient {
    pub fn from_config(config: &config::BackendConfig) -> Result<Self, BackendError> {
        // Trailing slash matters for Url::join: without it the last path
        // segment of the base would be replaced instead of extended.
        let raw = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };
        let base = Url::parse(&raw)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.base.join(path)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.http.get(self.url(path)?).send().await?;
        Self::decode(response).await
    }

    pub async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let response = self.http.get(self.url(path)?).query(query).send().await?;
        Self::decode(response).await
    }

    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, BackendError> {
        let response = self.http.post(self.url(path)?).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, BackendError> {
        let response = self.http.patch(self.url(path)?).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), BackendError> {
        let response = self.http.delete(self.url(path)?).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// Liveness probe against the backend root.
    pub async fn health(&self) -> Result<(), BackendError> {
        let response = self.http.get(self.base.clone()).send().await?;
        let status = response.status();
        if status.is_server_error() {
            Err(Self::status_error(status, response).await)
        } else {
            Ok(())
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> BackendError {
        let body = response.text().await.unwrap_or_default();
        BackendError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

// Shared client, configured once at startup like the config singleton.
// A bad base URL is a deployment error and fails fast on first use.
static BACKEND: Lazy<BackendClient> = Lazy::new(|| {
    BackendClient::from_config(&config::config().backend)
        .expect("backend client: invalid BACKEND_BASE_URL")
});

pub fn backend() -> &'static BackendClient {
    &BACKEND
}

// Collection accessors. Paths are the backend's own (Spanish) resource names.
pub fn orders() -> Resource<Order> {
    Resource::new(backend(), "ordenes")
}

pub fn tasks() -> Resource<Task> {
    Resource::new(backend(), "tareas")
}

pub fn users() -> Resource<User> {
    Resource::new(backend(), "usuarios")
}

pub fn groups() -> Resource<Group> {
    Resource::new(backend(), Group::PATH)
}

pub fn buildings() -> Resource<Building> {
    Resource::new(backend(), Building::PATH)
}

pub fn sectors() -> Resource<Sector> {
    Resource::new(backend(), Sector::PATH)
}

pub fn tags() -> Resource<Tag> {
    Resource::new(backend(), Tag::PATH)
}

/// Thread endpoints hang off the order collection.
pub async fn order_messages(order_id: i64) -> Result<Page<Message>, BackendError> {
    backend()
        .get_json(&format!("ordenes/{}/mensajes/", order_id))
        .await
}

pub async fn post_order_message(order_id: i64, body: &Value) -> Result<Message, BackendError> {
    backend()
        .post_json(&format!("ordenes/{}/mensajes/", order_id), body)
        .await
}

/// Look up a staff record by exact username (login path).
pub async fn user_by_username(username: &str) -> Result<Option<User>, BackendError> {
    let page: Page<User> = backend()
        .get_json_query("usuarios/", &[("username", username)])
        .await?;
    Ok(page.results.into_iter().find(|u| u.username == username))
}

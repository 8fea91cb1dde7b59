//! Catalog records managed through the admin surface. Each maps to one
//! backend collection; `CatalogModel` names that collection so the generic
//! admin handlers and the typed `Resource` client can be shared across them.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A record type backed by one backend collection endpoint.
pub trait CatalogModel: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// Path segment of the collection in the system of record
    const PATH: &'static str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub name: String,
    /// Owning building, when the sector is tied to one
    #[serde(default)]
    pub building: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl CatalogModel for Group {
    const PATH: &'static str = "grupos";
}

impl CatalogModel for Building {
    const PATH: &'static str = "edificios";
}

impl CatalogModel for Sector {
    const PATH: &'static str = "sectores";
}

impl CatalogModel for Tag {
    const PATH: &'static str = "etiquetas";
}

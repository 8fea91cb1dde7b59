pub mod auth;
pub mod chat;
pub mod orders;
pub mod tasks;

use serde::Deserialize;

/// Pagination pass-through: the backend owns page boundaries; this layer only
/// picks which snapshot page to fetch before filtering.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

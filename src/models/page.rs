use serde::{Deserialize, Serialize};

/// Paginated collection envelope as the system of record ships it:
/// `{ count, next, previous, results }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}


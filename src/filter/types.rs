use serde::{Deserialize, Serialize};

/// Filter specification for the order list. Constructed per request from
/// query parameters; every unset criterion matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    pub status: Option<u8>,
    pub priority: Option<u8>,
    /// Assignee username, compared case-sensitively
    pub assigned_to: Option<String>,
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: u8) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_assigned_to(mut self, username: impl Into<String>) -> Self {
        self.assigned_to = Some(username.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// The effective search term: trimmed of the "empty means unset" case.
    pub(crate) fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Filter specification for the task list, parallel to `OrderFilter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<u8>,
    pub assigned_to: Option<String>,
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: u8) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_assigned_to(mut self, username: impl Into<String>) -> Self {
        self.assigned_to = Some(username.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub(crate) fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::message::Message;
use super::user::UserRef;

/// Support ticket ("orden"). Status and priority travel as the backend's
/// numeric codes; display labels are resolved through the tables below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub requester: UserRef,
    #[serde(default)]
    pub assigned_to: Vec<UserRef>,
    pub title: String,
    pub status: u8,
    pub priority: u8,
    #[serde(default)]
    pub tags: Vec<super::catalog::Tag>,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Open,
    InProgress,
    Resolved,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Open,
        OrderStatus::InProgress,
        OrderStatus::Resolved,
        OrderStatus::Cancelled,
    ];

    pub const fn code(self) -> u8 {
        match self {
            OrderStatus::Open => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Resolved => 3,
            OrderStatus::Cancelled => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::Open => "Open",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Resolved => "Resolved",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Display label for a wire code. Unknown codes resolve to `None` rather
    /// than an error; free-text search treats them as label-less.
    pub fn label_of(code: u8) -> Option<&'static str> {
        STATUS_LABELS.get(&code).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderPriority {
    pub const ALL: [OrderPriority; 4] = [
        OrderPriority::Low,
        OrderPriority::Medium,
        OrderPriority::High,
        OrderPriority::Critical,
    ];

    pub const fn code(self) -> u8 {
        match self {
            OrderPriority::Low => 1,
            OrderPriority::Medium => 2,
            OrderPriority::High => 3,
            OrderPriority::Critical => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OrderPriority::Low => "Low",
            OrderPriority::Medium => "Medium",
            OrderPriority::High => "High",
            OrderPriority::Critical => "Critical",
        }
    }

    pub fn label_of(code: u8) -> Option<&'static str> {
        PRIORITY_LABELS.get(&code).copied()
    }
}

// Code -> label tables, built once from the declared members instead of
// re-deriving the reverse lookup per record per filter call.
static STATUS_LABELS: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    OrderStatus::ALL.iter().map(|s| (s.code(), s.label())).collect()
});

static PRIORITY_LABELS: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    OrderPriority::ALL.iter().map(|p| (p.code(), p.label())).collect()
});

use crate::models::{Order, OrderPriority, OrderStatus};

use super::types::OrderFilter;

/// Keep exactly the orders matching every active criterion, preserving the
/// input order. Pure; assumes well-formed records from the system of record.
pub fn filter_orders(orders: Vec<Order>, filter: &OrderFilter) -> Vec<Order> {
    orders
        .into_iter()
        .filter(|order| matches_order(order, filter))
        .collect()
}

/// All criteria combine with AND; an unset criterion always matches.
pub fn matches_order(order: &Order, filter: &OrderFilter) -> bool {
    if let Some(status) = filter.status {
        if order.status != status {
            return false;
        }
    }

    if let Some(priority) = filter.priority {
        if order.priority != priority {
            return false;
        }
    }

    if let Some(username) = filter.assigned_to.as_deref() {
        if !order.assigned_to.iter().any(|u| u.username == username) {
            return false;
        }
    }

    if let Some(term) = filter.search_term() {
        if !search_matches(order, term) {
            return false;
        }
    }

    true
}

/// Case-insensitive substring search across title, assignee usernames, the
/// status/priority display labels and message bodies. A wire code with no
/// declared label simply contributes nothing.
fn search_matches(order: &Order, term: &str) -> bool {
    let term = term.to_lowercase();

    if order.title.to_lowercase().contains(&term) {
        return true;
    }

    if order
        .assigned_to
        .iter()
        .any(|u| u.username.to_lowercase().contains(&term))
    {
        return true;
    }

    if OrderPriority::label_of(order.priority)
        .is_some_and(|label| label.to_lowercase().contains(&term))
    {
        return true;
    }

    if OrderStatus::label_of(order.status)
        .is_some_and(|label| label.to_lowercase().contains(&term))
    {
        return true;
    }

    order
        .messages
        .iter()
        .any(|m| m.body.to_lowercase().contains(&term))
}

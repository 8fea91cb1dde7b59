use chrono::Utc;

use soporte_api::filter::{filter_orders, OrderFilter};
use soporte_api::models::{Message, Order, OrderPriority, OrderStatus, UserRef};

// These tests pin the filter contract: AND composition, order preservation,
// case-insensitive search across title/assignees/labels/messages.

fn user(id: i64, username: &str) -> UserRef {
    UserRef {
        id,
        username: username.to_string(),
    }
}

fn order(id: i64, title: &str, status: OrderStatus, priority: OrderPriority) -> Order {
    let now = Utc::now();
    Order {
        id,
        requester: user(100, "frontdesk"),
        assigned_to: vec![],
        title: title.to_string(),
        status: status.code(),
        priority: priority.code(),
        tags: vec![],
        messages: vec![],
        created_at: now,
        updated_at: now,
        closed_at: None,
    }
}

fn message(id: i64, body: &str) -> Message {
    let now = Utc::now();
    Message {
        id,
        body: body.to_string(),
        author: user(101, "techsupport"),
        attachments: vec![],
        created_at: now,
        updated_at: now,
    }
}

fn fixture() -> Vec<Order> {
    let mut printer = order(1, "Printer issue", OrderStatus::Open, OrderPriority::Medium);
    printer.assigned_to = vec![user(10, "jdoe")];

    let mut network = order(2, "Network down", OrderStatus::InProgress, OrderPriority::Critical);
    network.assigned_to = vec![user(11, "asmith"), user(10, "jdoe")];
    network.messages = vec![message(1, "Switch rebooted, still urgent")];

    let access = order(3, "Door access card", OrderStatus::Resolved, OrderPriority::Low);

    vec![printer, network, access]
}

fn ids(orders: &[Order]) -> Vec<i64> {
    orders.iter().map(|o| o.id).collect()
}

#[test]
fn empty_filter_is_identity() {
    let orders = fixture();
    let filtered = filter_orders(orders.clone(), &OrderFilter::new());
    assert_eq!(ids(&filtered), ids(&orders));
}

#[test]
fn status_filter_partitions_exactly() {
    let orders = fixture();
    let filter = OrderFilter::new().with_status(OrderStatus::Open.code());
    let filtered = filter_orders(orders.clone(), &filter);

    assert!(filtered.iter().all(|o| o.status == OrderStatus::Open.code()));
    for excluded in orders.iter().filter(|o| !ids(&filtered).contains(&o.id)) {
        assert_ne!(excluded.status, OrderStatus::Open.code());
    }
}

#[test]
fn priority_filter_matches_wire_code() {
    let filtered = filter_orders(
        fixture(),
        &OrderFilter::new().with_priority(OrderPriority::Critical.code()),
    );
    assert_eq!(ids(&filtered), vec![2]);
}

#[test]
fn search_is_case_insensitive() {
    let upper = filter_orders(fixture(), &OrderFilter::new().with_search("URGENT"));
    let lower = filter_orders(fixture(), &OrderFilter::new().with_search("urgent"));
    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(ids(&upper), vec![2]);
}

#[test]
fn search_by_title_includes_and_excludes() {
    let hit = filter_orders(fixture(), &OrderFilter::new().with_search("issue"));
    assert_eq!(ids(&hit), vec![1]);

    let miss = filter_orders(fixture(), &OrderFilter::new().with_search("zzz"));
    assert!(miss.is_empty());
}

#[test]
fn search_covers_assignees_labels_and_messages() {
    // assignee username
    assert_eq!(ids(&filter_orders(fixture(), &OrderFilter::new().with_search("asmith"))), vec![2]);
    // status label
    assert_eq!(ids(&filter_orders(fixture(), &OrderFilter::new().with_search("resolved"))), vec![3]);
    // priority label
    assert_eq!(ids(&filter_orders(fixture(), &OrderFilter::new().with_search("critical"))), vec![2]);
    // message body
    assert_eq!(ids(&filter_orders(fixture(), &OrderFilter::new().with_search("rebooted"))), vec![2]);
}

#[test]
fn assignee_filter_is_exact_and_case_sensitive() {
    let both = filter_orders(fixture(), &OrderFilter::new().with_assigned_to("jdoe"));
    assert_eq!(ids(&both), vec![1, 2]);

    let none = filter_orders(fixture(), &OrderFilter::new().with_assigned_to("JDoe"));
    assert!(none.is_empty());
}

#[test]
fn criteria_combine_with_and() {
    let filter = OrderFilter::new()
        .with_assigned_to("jdoe")
        .with_status(OrderStatus::InProgress.code());
    assert_eq!(ids(&filter_orders(fixture(), &filter)), vec![2]);
}

#[test]
fn relative_order_is_preserved() {
    let filter = OrderFilter::new().with_assigned_to("jdoe");
    let filtered = filter_orders(fixture(), &filter);
    assert_eq!(ids(&filtered), vec![1, 2]);
}

#[test]
fn unknown_wire_codes_never_error() {
    let mut odd = order(9, "Strange state", OrderStatus::Open, OrderPriority::Low);
    odd.status = 77;
    odd.priority = 88;

    // Matching on the unknown code itself still works via exact equality
    let by_code = filter_orders(vec![odd.clone()], &OrderFilter::new().with_status(77));
    assert_eq!(ids(&by_code), vec![9]);

    // But no label exists, so label-based search contributes nothing
    let by_label = filter_orders(vec![odd], &OrderFilter::new().with_search("open"));
    assert!(by_label.is_empty());
}

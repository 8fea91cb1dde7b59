pub mod orders;
pub mod tasks;
pub mod types;

pub use orders::{filter_orders, matches_order};
pub use tasks::{filter_tasks, matches_task};
pub use types::{OrderFilter, TaskFilter};

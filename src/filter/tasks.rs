use crate::models::{Task, TaskStatus};

use super::types::TaskFilter;

/// Task counterpart of `filter_orders`: same AND semantics, same ordering
/// guarantee, searching title, description, assignees and the status label.
pub fn filter_tasks(tasks: Vec<Task>, filter: &TaskFilter) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| matches_task(task, filter))
        .collect()
}

pub fn matches_task(task: &Task, filter: &TaskFilter) -> bool {
    if let Some(status) = filter.status {
        if task.status != status {
            return false;
        }
    }

    if let Some(username) = filter.assigned_to.as_deref() {
        if !task.assigned_to.iter().any(|u| u.username == username) {
            return false;
        }
    }

    if let Some(term) = filter.search_term() {
        if !search_matches(task, term) {
            return false;
        }
    }

    true
}

fn search_matches(task: &Task, term: &str) -> bool {
    let term = term.to_lowercase();

    if task.title.to_lowercase().contains(&term) {
        return true;
    }

    if task.description.to_lowercase().contains(&term) {
        return true;
    }

    if task
        .assigned_to
        .iter()
        .any(|u| u.username.to_lowercase().contains(&term))
    {
        return true;
    }

    TaskStatus::label_of(task.status)
        .is_some_and(|label| label.to_lowercase().contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;
    use chrono::Utc;

    fn task(id: i64, title: &str, status: TaskStatus) -> Task {
        let now = Utc::now();
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            status: status.code(),
            assigned_to: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_and_search_combine_with_and() {
        let mut a = task(1, "Replace switch", TaskStatus::Pending);
        a.assigned_to = vec![UserRef { id: 5, username: "jdoe".into() }];
        let b = task(2, "Replace router", TaskStatus::Done);

        let filter = TaskFilter::new()
            .with_status(TaskStatus::Pending.code())
            .with_search("replace");
        let filtered = filter_tasks(vec![a, b], &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn search_hits_description() {
        let mut t = task(1, "Weekly round", TaskStatus::Pending);
        t.description = "Check the server room temperature".into();
        let filtered = filter_tasks(vec![t], &TaskFilter::new().with_search("SERVER ROOM"));
        assert_eq!(filtered.len(), 1);
    }
}

//! Filtering projection over the task collection.
//!
//! A pure function of the collection and the filter mode. The store never
//! holds a filter; the presentation layer chooses a mode per request and the
//! projection is recomputed from the canonical order every time.

use crate::fields::Filter;
use crate::task::Task;

/// The visible slice of the collection plus the incomplete-task count.
#[derive(Debug)]
pub struct Projection<'a> {
    /// Tasks matching the filter, in canonical collection order.
    pub visible: Vec<&'a Task>,
    /// Count of incomplete tasks over the whole collection, independent of
    /// the chosen mode.
    pub remaining: usize,
}

/// Project the collection under a filter mode.
pub fn project(tasks: &[Task], mode: Filter) -> Projection<'_> {
    let visible = tasks
        .iter()
        .filter(|t| match mode {
            Filter::All => true,
            Filter::Active => !t.completed,
            Filter::Completed => t.completed,
        })
        .collect();
    let remaining = tasks.iter().filter(|t| !t.completed).count();
    Projection { visible, remaining }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Task> {
        let mut tasks = vec![
            Task::new("one".into()),
            Task::new("two".into()),
            Task::new("three".into()),
        ];
        tasks[1].completed = true;
        tasks
    }

    #[test]
    fn all_preserves_order() {
        let tasks = fixture();
        let p = project(&tasks, Filter::All);
        let texts: Vec<&str> = p.visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn active_and_completed_partition_the_collection() {
        let tasks = fixture();
        let active = project(&tasks, Filter::Active);
        let completed = project(&tasks, Filter::Completed);
        assert_eq!(active.visible.len() + completed.visible.len(), tasks.len());
        for t in &active.visible {
            assert!(!completed.visible.iter().any(|c| c.id == t.id));
        }
    }

    #[test]
    fn remaining_is_mode_independent() {
        let tasks = fixture();
        for mode in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(project(&tasks, mode).remaining, 2);
        }
    }

    #[test]
    fn empty_collection_projects_empty() {
        let p = project(&[], Filter::All);
        assert!(p.visible.is_empty());
        assert_eq!(p.remaining, 0);
    }
}

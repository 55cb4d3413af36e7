//! Task Engine: the single source of truth for the task collection
//!
//! Owns the in-memory collection, hydrated once from the [`TaskStore`] at
//! construction. Every mutation updates memory and writes through to the
//! store; store failures never reach the caller (the store degrades to a
//! logged no-op), so a mutation has succeeded once memory is updated.
//! Memory is the session's source of truth, the store is best-effort
//! durability.
//!
//! The derived view is a pure function of (collection, filter, sort option,
//! sort direction), recomputed on demand.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tracing::debug;

use crate::domain::{Priority, SortDirection, SortOption, Status, Task, TaskFilter};
use crate::store::TaskStore;

/// Owns the in-memory task collection and all mutation operations
pub struct TaskEngine {
    store: TaskStore,
    tasks: Vec<Task>,
    filter: TaskFilter,
    sort_option: SortOption,
    sort_direction: SortDirection,
}

impl TaskEngine {
    /// Create an engine, hydrating the collection from the store
    pub fn new(store: TaskStore) -> Self {
        let tasks = store.load_tasks();
        debug!(count = tasks.len(), "Hydrated task collection");
        Self {
            store,
            tasks,
            filter: TaskFilter::default(),
            sort_option: SortOption::default(),
            sort_direction: SortDirection::default(),
        }
    }

    /// The full in-memory collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a new task and append it to the collection
    ///
    /// The title is not re-validated here; rejecting empty titles is the
    /// caller's responsibility.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: DateTime<Utc>,
        status: Status,
    ) -> Task {
        let task = Task::new(title, description, priority, due_date, status);
        debug!(task_id = %task.id, title = %task.title, "add_task");
        self.store.write_task(&task);
        self.tasks.push(task.clone());
        task
    }

    /// Replace the task matching `task.id`, refreshing its `updated_at`
    ///
    /// The write-through happens unconditionally; memory is left untouched
    /// when the id is unknown.
    pub fn update_task(&mut self, mut task: Task) {
        debug!(task_id = %task.id, "update_task");
        self.store.write_task(&task);
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            task.touch();
            *existing = task;
        }
    }

    /// Remove a task from memory and store; no-op when unknown
    pub fn remove_task(&mut self, id: &str) {
        debug!(task_id = %id, "remove_task");
        self.store.delete_task(id);
        self.tasks.retain(|t| t.id != id);
    }

    /// Set a task's status to completed; no-op when unknown
    ///
    /// All other fields are left unchanged.
    pub fn mark_completed(&mut self, id: &str) {
        if let Some(task) = self.get(id) {
            let mut task = task.clone();
            task.set_status(Status::Completed);
            self.update_task(task);
        }
    }

    /// Remove all completed tasks from memory and store
    pub fn clear_completed(&mut self) {
        debug!("clear_completed");
        self.store.clear_completed();
        self.tasks.retain(|t| !t.is_completed());
    }

    /// Empty memory and store
    pub fn reset_all(&mut self) {
        debug!("reset_all");
        self.store.reset_all();
        self.tasks.clear();
    }

    /// Replace the filter predicates
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Set the sort key
    pub fn set_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
    }

    /// Set the sort direction
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The filtered and sorted projection of the collection
    ///
    /// The sort is stable: tasks with equal keys keep their insertion order
    /// in both directions, because `Desc` reverses each comparison rather
    /// than the result sequence.
    pub fn derived_view(&self) -> Vec<Task> {
        let mut view: Vec<Task> = self.tasks.iter().filter(|t| self.filter.matches(t)).cloned().collect();

        let option = self.sort_option;
        let direction = self.sort_direction;
        view.sort_by(|a, b| {
            let ordering = compare_keys(a, b, option);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        view
    }
}

fn compare_keys(a: &Task, b: &Task, option: SortOption) -> Ordering {
    match option {
        SortOption::Priority => a.priority.cmp(&b.priority),
        SortOption::DueDate => a.due_date.cmp(&b.due_date),
        SortOption::Status => a.status.cmp(&b.status),
        SortOption::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

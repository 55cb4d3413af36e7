//! Filter and sort parameters for the derived view
//!
//! These are transient view parameters held by the engine, never persisted.

use serde::{Deserialize, Serialize};

use super::task::{Priority, Status, Task};

/// A conjunction of optional predicates applied to the task collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Keep only tasks with this priority
    pub priority: Option<Priority>,
    /// Keep only tasks with this status
    pub status: Option<Status>,
    /// Keep only tasks whose title or description contains this term
    /// (case-insensitive substring match)
    pub search_term: Option<String>,
}

impl TaskFilter {
    /// Check whether a task passes every set predicate
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(priority) = self.priority
            && task.priority != priority
        {
            return false;
        }
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }
        if let Some(term) = &self.search_term {
            let term = term.to_lowercase();
            if !task.title.to_lowercase().contains(&term) && !task.description.to_lowercase().contains(&term) {
                return false;
            }
        }
        true
    }

    /// Check if no predicate is set
    pub fn is_empty(&self) -> bool {
        self.priority.is_none() && self.status.is_none() && self.search_term.is_none()
    }
}

/// Key to sort the derived view by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    Priority,
    DueDate,
    Status,
    #[default]
    CreatedAt,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::DueDate => write!(f, "due-date"),
            Self::Status => write!(f, "status"),
            Self::CreatedAt => write!(f, "created-at"),
        }
    }
}

impl std::str::FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "due-date" | "due_date" | "duedate" | "due" => Ok(Self::DueDate),
            "status" => Ok(Self::Status),
            "created-at" | "created_at" | "createdat" | "created" => Ok(Self::CreatedAt),
            _ => Err(format!(
                "Unknown sort option: {}. Use: priority, due-date, status, or created-at",
                s
            )),
        }
    }
}

/// Direction of the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort direction: {}. Use: asc or desc", s)),
        }
    }
}

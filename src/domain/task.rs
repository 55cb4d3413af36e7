//! The Task entity
//!
//! Task is the sole persisted entity. Field names serialize in camelCase and
//! timestamps as RFC 3339 strings, matching the on-disk document layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority level for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Workflow status of a task
///
/// Transitions form a free graph: any status is directly reachable from any
/// other via an update, including moving away from `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A single trackable to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, generated at creation and never mutated
    pub id: String,

    /// Short title; the CLI rejects titles that are empty after trimming
    pub title: String,

    /// Longer description, may be empty
    pub description: String,

    /// Priority level
    pub priority: Priority,

    /// When the task is due
    pub due_date: DateTime<Utc>,

    /// Current workflow status
    pub status: Status,

    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new Task with a fresh UUID and `created_at == updated_at`
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: DateTime<Utc>,
        status: Status,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            priority,
            due_date,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the mutation timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Update the status
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    /// Check if the task is completed
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> DateTime<Utc> {
        "2025-01-10T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Low.to_string(), "low");
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("invalid".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_ordering() {
        assert!(Status::Pending < Status::InProgress);
        assert!(Status::InProgress < Status::Completed);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("done".parse::<Status>().unwrap(), Status::Completed);
        assert!("unknown".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let status: Status = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, Status::Completed);
    }

    #[test]
    fn test_task_new() {
        let task = Task::new("Buy milk", "", Priority::Low, due(), Status::Pending);
        assert!(!task.id.is_empty());
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_ids_unique() {
        let a = Task::new("a", "", Priority::Low, due(), Status::Pending);
        let b = Task::new("a", "", Priority::Low, due(), Status::Pending);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_touch_monotone() {
        let mut task = Task::new("a", "", Priority::Low, due(), Status::Pending);
        let before = task.updated_at;
        task.touch();
        assert!(task.updated_at >= before);
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_task_serde_camel_case() {
        let task = Task::new("Write report", "quarterly", Priority::High, due(), Status::InProgress);
        let json = serde_json::to_string(&task).unwrap();

        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"in-progress\""));
        assert!(json.contains("\"high\""));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, deserialized);
    }
}

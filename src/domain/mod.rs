//! Domain types for taskify
//!
//! Core domain types: Task and its Priority/Status enums, the transient
//! filter and sort parameters, and the persisted app settings.

mod filter;
mod settings;
mod task;

pub use filter::{SortDirection, SortOption, TaskFilter};
pub use settings::{AppSettings, Theme};
pub use task::{Priority, Status, Task};

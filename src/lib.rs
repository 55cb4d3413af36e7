//! taskify - personal task tracker core
//!
//! The task state engine: entity model, filter/sort pipeline, and the
//! write-through persistence contract that keeps the in-memory task
//! collection synchronized with durable local storage.
//!
//! # Architecture
//!
//! ```text
//! caller (CLI/UI)
//!     │ mutations, view parameters
//!     ▼
//! TaskEngine          in-memory collection, derived view
//!     │ write-through
//!     ▼
//! TaskStore           tasks.json + settings.json
//! ```
//!
//! Every engine mutation updates memory and writes through to the store
//! before it is considered complete. Store faults never surface to the
//! caller: reads degrade to empty, writes to a logged no-op, so the
//! in-memory session continues uninterrupted.
//!
//! # Example
//!
//! ```ignore
//! use taskify::{Priority, Status, TaskEngine, TaskStore};
//!
//! let store = TaskStore::open("~/.local/share/taskify")?;
//! let mut engine = TaskEngine::new(store);
//! let task = engine.add_task("Buy milk", "", Priority::Low, due, Status::Pending);
//! engine.mark_completed(&task.id);
//! let view = engine.derived_view();
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod store;

pub use config::Config;
pub use domain::{AppSettings, Priority, SortDirection, SortOption, Status, Task, TaskFilter, Theme};
pub use engine::TaskEngine;
pub use store::TaskStore;

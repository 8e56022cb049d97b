//! Core domain models for TaskMaster, shared by the task store and its clients.
pub mod filter;
pub mod stats;
pub mod task;

pub use filter::{TaskFilter, UnknownFilter};
pub use stats::TaskStats;
pub use task::{NewTask, Priority, Task, TaskPatch, TaskValidationError, parse_deadline};

//! Client side of TaskMaster: talks to the task store over HTTP and keeps the
//! board state the terminal views render.
pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use board::TaskBoard;
pub use config::ClientConfig;
pub use error::ClientError;

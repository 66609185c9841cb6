//! 核心编排层：错误类型、UI 状态投影、存储编排主循环

pub mod error;
pub mod orchestrator;
pub mod state;

pub use error::StoreError;
pub use orchestrator::{open_controller, spawn_store, Command};
pub use state::{UiState, ViewMode};

//! TUI 层：Ratatui + crossterm，主循环（app）、事件（event）、输入解析（command）、渲染（render）

pub mod app;
pub mod command;
pub mod event;
pub mod render;

pub use app::run_app;
pub use command::parse_command;
pub use event::EventHandler;
pub use render::draw;

//! SkillTrack - 个人技能档案
//!
//! 模块划分：
//! - **model**: 技能记录、熟练度等级、撤销记录
//! - **store**: 技能档案聚合（主序列 + 分类索引 + 最近添加 + 撤销栈）、CSV 编解码、存储后端
//! - **util**: 稳定归并排序、二分 / 线性查找
//! - **controller**: 展示层调用核心的门面
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误类型、UI 状态投影、存储编排主循环
//! - **observability**: 日志初始化
//! - **ui**: Ratatui TUI 界面

pub mod config;
pub mod controller;
pub mod core;
pub mod model;
pub mod observability;
pub mod store;
pub mod ui;
pub mod util;

pub use controller::SkillController;
pub use core::StoreError;
pub use model::{ProficiencyLevel, Skill, UndoAction};
pub use store::SkillStore;

//! 数据模型：技能记录、熟练度等级、撤销记录

pub mod level;
pub mod skill;
pub mod undo;

pub use level::ProficiencyLevel;
pub use skill::Skill;
pub use undo::{UndoAction, UndoKind};

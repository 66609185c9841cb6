//! 存储层：技能档案聚合、CSV 编解码、可替换的存储后端

pub mod csv;
pub mod skill_store;
pub mod storage;

pub use skill_store::{normalize_category, SkillStore, RECENT_CAPACITY, UNCATEGORIZED};
pub use storage::{FileStorage, MemoryStorage, SkillStorage};

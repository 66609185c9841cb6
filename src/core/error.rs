//! 技能档案错误类型
//!
//! DuplicateIdentity / NotFound 同步返回给调用方，由调用方修正输入；
//! Persistence 在保存路径上只记录日志、不回滚内存状态。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// 已存在 name + category（忽略大小写）相同的技能
    #[error("Duplicate skill: '{name}' already exists in category '{category}'")]
    DuplicateIdentity { name: String, category: String },

    #[error("Skill not found: {0}")]
    NotFound(String),

    /// 输入解析失败（如年份不是数字），由展示层产生
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

impl StoreError {
    pub fn duplicate(name: &str, category: &str) -> Self {
        Self::DuplicateIdentity {
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

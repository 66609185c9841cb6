//! 技能记录
//!
//! `id` 创建后不可变（新建时生成 UUID，从 CSV 加载时原样保留）；其余字段只通过 SkillStore 的更新路径修改。

use serde::Serialize;

use crate::model::ProficiencyLevel;

/// 单条技能记录
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    id: String,
    pub name: String,
    pub category: String,
    pub level: ProficiencyLevel,
    pub year_learned: i32,
    pub certification: Option<String>,
}

impl Skill {
    /// 新建技能，自动生成 id
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        level: ProficiencyLevel,
        year_learned: i32,
        certification: Option<String>,
    ) -> Self {
        Self::with_id(
            uuid::Uuid::new_v4().to_string(),
            name,
            category,
            level,
            year_learned,
            certification,
        )
    }

    /// 使用已有 id 构造（CSV 加载时使用）
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        level: ProficiencyLevel,
        year_learned: i32,
        certification: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            level,
            year_learned,
            certification,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 重复判定：name + category 忽略大小写相同
    pub fn same_identity_as(&self, other: &Skill) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.category.to_lowercase() == other.category.to_lowercase()
    }

    /// 用 other 覆盖除 id 外的全部字段
    pub(crate) fn assign_fields(&mut self, other: &Skill) {
        self.name = other.name.clone();
        self.category = other.category.clone();
        self.level = other.level;
        self.year_learned = other.year_learned;
        self.certification = other.certification.clone();
    }
}

//! 熟练度等级
//!
//! 固定四档，按 BEGINNER < INTERMEDIATE < ADVANCED < EXPERT 排序；
//! 解析宽松：去空白、忽略大小写，无法识别时回落到 BEGINNER 而不是报错。

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// 所有等级，按从低到高
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Beginner,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Expert,
    ];

    /// 规范名称（写入 CSV 时使用，大小写敏感）
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "BEGINNER",
            ProficiencyLevel::Intermediate => "INTERMEDIATE",
            ProficiencyLevel::Advanced => "ADVANCED",
            ProficiencyLevel::Expert => "EXPERT",
        }
    }

    /// 严格解析：trim + 忽略大小写，未知值返回 None
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
    }

    /// 宽松解析：空串或未知值返回默认的 BEGINNER
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! CSV 行编解码
//!
//! 每行一条记录、无表头，字段顺序 id,name,category,level,year_learned,certification；
//! 每个字段都用双引号包裹，内部双引号写成两个。读取时按引号切分，兼容未加引号的字段。

use crate::model::{ProficiencyLevel, Skill};

/// 一行至少需要的字段数
pub const FIELD_COUNT: usize = 6;

/// 单行解码失败的原因：字段不足时跳过该行，年份非法时中止整次加载
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Malformed { fields: usize },
    InvalidYear(String),
}

/// 将一条记录编码为一行（不含换行符）
pub fn encode_line(skill: &Skill) -> String {
    let year = skill.year_learned.to_string();
    let level = skill.level.as_str();
    let certification = skill.certification.as_deref().unwrap_or("");
    [
        skill.id(),
        skill.name.as_str(),
        skill.category.as_str(),
        level,
        year.as_str(),
        certification,
    ]
    .iter()
    .map(|field| quote(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// 编码整个集合，每条记录后跟一个换行
pub fn encode_all(skills: &[Skill]) -> String {
    let mut out = String::new();
    for skill in skills {
        out.push_str(&encode_line(skill));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// 按引号切分一行：引号内的逗号不分隔，引号内的 "" 还原为 "
pub fn split_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cur.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => out.push(std::mem::take(&mut cur)),
            _ => cur.push(c),
        }
    }
    out.push(cur);
    out
}

/// 解码一行；id 原样保留，空的 certification 视为无
pub fn decode_line(line: &str) -> Result<Skill, DecodeError> {
    let mut parts = split_line(line);
    if parts.len() < FIELD_COUNT {
        return Err(DecodeError::Malformed {
            fields: parts.len(),
        });
    }
    let year_learned = parts[4]
        .parse::<i32>()
        .map_err(|_| DecodeError::InvalidYear(parts[4].clone()))?;
    let certification = std::mem::take(&mut parts[5]);
    let level = ProficiencyLevel::parse_lenient(&parts[3]);
    let mut fields = parts.into_iter();
    let id = fields.next().unwrap_or_default();
    let name = fields.next().unwrap_or_default();
    let category = fields.next().unwrap_or_default();

    Ok(Skill::with_id(
        id,
        name,
        category,
        level,
        year_learned,
        (!certification.is_empty()).then_some(certification),
    ))
}

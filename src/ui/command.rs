//! 输入解析：把输入框里的一行文字转换为 Command
//!
//! 这里是 InvalidInput 的唯一来源（年份不是数字、字段不足、未知等级等）。
//!
//! - `add 名称 | 分类 | 等级 | 年份 [| 证书]`
//! - `edit 名称 | 分类 | 等级 | 年份 [| 证书]`（作用于表格选中行）
//! - `del`（删除选中行）、`undo`、`all`
//! - `sort name|year [asc|desc]`
//! - `find 文本`、`name 精确名称`、`year 年份`
//! - `help`、`quit`

use crate::core::{Command, StoreError, ViewMode};
use crate::model::{ProficiencyLevel, Skill};

/// 输入框底部的用法提示
pub const HELP: &str = "add 名称|分类|等级|年份[|证书] · edit … · del · undo · sort name|year [asc|desc] · find 文本 · name 名称 · year 年份 · all · help · quit";

/// 解析一行输入；selected 为表格当前选中的技能（edit / del 使用）
pub fn parse_command(line: &str, selected: Option<&Skill>) -> Result<Command, StoreError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "add" => Ok(Command::Add(parse_form(rest, None)?)),
        "edit" => {
            let current = require_selected(selected)?;
            let data = parse_form(rest, Some(current.id()))?;
            Ok(Command::Update {
                id: current.id().to_string(),
                data,
            })
        }
        "del" | "delete" => Ok(Command::Delete(require_selected(selected)?.id().to_string())),
        "undo" => Ok(Command::Undo),
        "help" | "?" => Ok(Command::Help),
        "all" => Ok(Command::Show(ViewMode::All)),
        "sort" => parse_sort(rest),
        "find" => {
            if rest.is_empty() {
                return Err(invalid("请输入要搜索的文本"));
            }
            Ok(Command::Show(ViewMode::Search(rest.to_string())))
        }
        "name" => {
            if rest.is_empty() {
                return Err(invalid("请输入精确名称"));
            }
            Ok(Command::Show(ViewMode::ExactName(rest.to_string())))
        }
        "year" => Ok(Command::Show(ViewMode::ExactYear(parse_year(rest)?))),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(invalid("请输入命令")),
        other => Err(invalid(format!("未知命令 '{}'", other))),
    }
}

fn invalid(msg: impl Into<String>) -> StoreError {
    StoreError::InvalidInput(msg.into())
}

fn require_selected(selected: Option<&Skill>) -> Result<&Skill, StoreError> {
    selected.ok_or_else(|| invalid("请先选中一条技能"))
}

fn parse_year(raw: &str) -> Result<i32, StoreError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| invalid("年份必须是有效数字"))
}

/// 等级输入：空值默认 BEGINNER，未知值报错（不像 CSV 读取那样静默回落）
fn parse_level(raw: &str) -> Result<ProficiencyLevel, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(ProficiencyLevel::Beginner);
    }
    ProficiencyLevel::parse(raw).ok_or_else(|| invalid(format!("未知等级 '{}'", raw)))
}

/// 解析表单：名称 | 分类 | 等级 | 年份 [| 证书]
fn parse_form(rest: &str, id: Option<&str>) -> Result<Skill, StoreError> {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(invalid("格式：名称 | 分类 | 等级 | 年份 [| 证书]"));
    }
    let name = fields[0];
    if name.is_empty() {
        return Err(invalid("名称不能为空"));
    }
    let category = fields[1];
    let level = parse_level(fields[2])?;
    let year = parse_year(fields[3])?;
    let certification = fields
        .get(4)
        .filter(|c| !c.is_empty())
        .map(|c| c.to_string());

    Ok(match id {
        Some(id) => Skill::with_id(id, name, category, level, year, certification),
        None => Skill::new(name, category, level, year, certification),
    })
}

fn parse_sort(rest: &str) -> Result<Command, StoreError> {
    let mut parts = rest.split_whitespace();
    let key = parts.next().unwrap_or("").to_lowercase();
    let ascending = match parts.next().map(str::to_lowercase).as_deref() {
        None | Some("asc") => true,
        Some("desc") => false,
        Some(other) => return Err(invalid(format!("排序方向只能是 asc / desc，而不是 '{}'", other))),
    };
    match key.as_str() {
        "name" => Ok(Command::Show(ViewMode::SortedByName { ascending })),
        "year" => Ok(Command::Show(ViewMode::SortedByYear { ascending })),
        _ => Err(invalid("排序字段只能是 name / year")),
    }
}

//! 撤销记录
//!
//! 每次外部 add / update / delete 产生一条；快照是变更提交时的深拷贝，之后对活记录的修改不会反映到这里。

use crate::model::Skill;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoAction {
    /// 撤销时按 after.id 删除
    Add { after: Skill },
    /// 撤销时原样重新插入 before
    Delete { before: Skill },
    /// 撤销时把字段恢复为 before
    Update { before: Skill, after: Skill },
}

/// 撤销记录类型（用于展示）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoKind {
    Add,
    Delete,
    Update,
}

impl UndoAction {
    pub fn add(added: &Skill) -> Self {
        Self::Add {
            after: added.clone(),
        }
    }

    pub fn delete(deleted: &Skill) -> Self {
        Self::Delete {
            before: deleted.clone(),
        }
    }

    pub fn update(before: &Skill, after: &Skill) -> Self {
        Self::Update {
            before: before.clone(),
            after: after.clone(),
        }
    }

    pub fn kind(&self) -> UndoKind {
        match self {
            UndoAction::Add { .. } => UndoKind::Add,
            UndoAction::Delete { .. } => UndoKind::Delete,
            UndoAction::Update { .. } => UndoKind::Update,
        }
    }

    /// 该记录涉及的技能 id
    pub fn skill_id(&self) -> &str {
        match self {
            UndoAction::Add { after } => after.id(),
            UndoAction::Delete { before } | UndoAction::Update { before, .. } => before.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProficiencyLevel;

    #[test]
    fn test_snapshot_is_detached_from_live_record() {
        let mut live = Skill::new("Go", "Programming", ProficiencyLevel::Beginner, 2020, None);
        let action = UndoAction::add(&live);
        live.name = "Changed".to_string();
        match action {
            UndoAction::Add { after } => assert_eq!(after.name, "Go"),
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_and_skill_id() {
        let before = Skill::new("Go", "Programming", ProficiencyLevel::Beginner, 2020, None);
        let mut after = before.clone();
        after.level = ProficiencyLevel::Expert;
        let action = UndoAction::update(&before, &after);
        assert_eq!(action.kind(), UndoKind::Update);
        assert_eq!(action.skill_id(), before.id());
        assert_eq!(UndoAction::delete(&before).kind(), UndoKind::Delete);
    }
}

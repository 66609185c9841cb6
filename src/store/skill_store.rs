//! 技能档案存储
//!
//! 唯一持有记录集合的聚合：主序列（插入顺序）、分类索引、最近添加队列（最多 5 条）、撤销栈。
//! 每次外部变更（add / update / delete / undo）完成后整文件重写到存储后端；
//! 保存失败只记录日志，内存状态始终为准。

use std::collections::{HashMap, VecDeque};

use crate::core::StoreError;
use crate::model::{Skill, UndoAction};
use crate::store::csv::{self, DecodeError};
use crate::store::{MemoryStorage, SkillStorage};

/// 最近添加队列容量
pub const RECENT_CAPACITY: usize = 5;

/// 分类为空（或只有空白）时使用的分组名
pub const UNCATEGORIZED: &str = "Uncategorized";

/// 分类索引键：去掉首尾空白，空串归入 Uncategorized
pub fn normalize_category(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED
    } else {
        trimmed
    }
}

pub struct SkillStore {
    skills: Vec<Skill>,
    /// 规范化分类名 -> 该分类下的技能 id（保持主序列中的相对顺序）
    by_category: HashMap<String, Vec<String>>,
    /// 最近添加的 id，队首最旧
    recent: VecDeque<String>,
    /// 栈顶为最近一次变更
    undo_stack: Vec<UndoAction>,
    storage: Box<dyn SkillStorage>,
}

impl std::fmt::Debug for SkillStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillStore")
            .field("skills", &self.skills.len())
            .field("categories", &self.by_category.len())
            .field("recent", &self.recent)
            .field("undo_depth", &self.undo_stack.len())
            .field("storage", &self.storage.describe())
            .finish()
    }
}

impl SkillStore {
    pub fn new(storage: impl SkillStorage + 'static) -> Self {
        Self {
            skills: Vec::new(),
            by_category: HashMap::new(),
            recent: VecDeque::new(),
            undo_stack: Vec::new(),
            storage: Box::new(storage),
        }
    }

    /// 仅在内存中保存的存储（测试、演示用）
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    // ---------- 查询 ----------

    /// 全部技能，按当前主序列顺序
    pub fn all_records(&self) -> &[Skill] {
        &self.skills
    }

    /// 最近添加，从旧到新
    pub fn recently_added(&self) -> Vec<&Skill> {
        self.recent.iter().filter_map(|id| self.get(id)).collect()
    }

    pub fn total_count(&self) -> usize {
        self.skills.len()
    }

    /// 分类 -> 数量，按分类名忽略大小写排序（大小写不同的分类各自独立计数）
    pub fn category_stats(&self) -> Vec<(String, usize)> {
        let mut stats: Vec<(String, usize)> = self
            .by_category
            .iter()
            .map(|(category, ids)| (category.clone(), ids.len()))
            .collect();
        stats.sort_by(|(a, _), (b, _)| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        stats
    }

    /// 某个分类下的技能；category 会先规范化
    pub fn category_members(&self, category: &str) -> Vec<&Skill> {
        self.by_category
            .get(normalize_category(category))
            .map(|ids| ids.iter().filter_map(|id| self.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id() == id)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// 下一次 undo 将要撤销的记录
    pub fn peek_undo(&self) -> Option<&UndoAction> {
        self.undo_stack.last()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    // ---------- 增删改 ----------

    /// 添加技能；name + category（忽略大小写）已存在时返回 DuplicateIdentity，状态不变
    pub fn add(&mut self, skill: Skill) -> Result<(), StoreError> {
        if self.skills.iter().any(|existing| existing.same_identity_as(&skill)) {
            return Err(StoreError::duplicate(&skill.name, &skill.category));
        }

        tracing::debug!(id = skill.id(), name = %skill.name, "add skill");
        self.undo_stack.push(UndoAction::add(&skill));
        self.insert_no_undo(skill);
        self.save_to_disk();
        Ok(())
    }

    /// 用 data 覆盖 id 对应记录除 id 外的全部字段；data 自身的 id 被忽略
    pub fn update(&mut self, id: &str, data: &Skill) -> Result<(), StoreError> {
        let pos = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if self
            .skills
            .iter()
            .any(|s| s.id() != id && s.same_identity_as(data))
        {
            return Err(StoreError::duplicate(&data.name, &data.category));
        }

        let before = self.skills[pos].clone();
        self.overwrite_at(pos, data);
        let after = &self.skills[pos];

        tracing::debug!(id, name = %after.name, "update skill");
        self.undo_stack.push(UndoAction::update(&before, after));
        self.save_to_disk();
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let removed = self
            .remove_no_undo(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        tracing::debug!(id, name = %removed.name, "delete skill");
        self.undo_stack.push(UndoAction::delete(&removed));
        self.save_to_disk();
        Ok(())
    }

    // ---------- 撤销 ----------

    /// 弹出最近一条撤销记录并反向重放，不产生新的撤销记录；栈为空时什么也不做
    pub fn undo(&mut self) {
        let Some(action) = self.undo_stack.pop() else {
            return;
        };

        tracing::debug!(kind = ?action.kind(), id = action.skill_id(), "undo");
        match action {
            UndoAction::Add { after } => {
                self.remove_no_undo(after.id());
            }
            UndoAction::Delete { before } => {
                self.insert_no_undo(before);
            }
            UndoAction::Update { before, .. } => {
                if let Some(pos) = self.position(before.id()) {
                    self.overwrite_at(pos, &before);
                }
            }
        }

        self.save_to_disk();
    }

    // ---------- 持久化 ----------

    /// 从存储后端重建全部状态（撤销栈、最近队列一并清空，最近队列用最后 5 条重新填充）
    ///
    /// - 文件不存在：什么也不做
    /// - 字段不足 6 个的行：跳过并继续
    /// - 年份无法解析：中止本次加载，保留已加载的部分，最近队列不再填充
    ///
    /// 以上情况都只写日志，不向调用方返回错误。
    pub fn load_from_disk(&mut self) {
        let contents = match self.storage.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::info!("No skill file at {}, starting empty", self.storage.describe());
                return;
            }
            Err(e) => {
                tracing::error!("Load failed ({}): {}", self.storage.describe(), e);
                return;
            }
        };

        self.skills.clear();
        self.by_category.clear();
        self.recent.clear();
        self.undo_stack.clear();

        for (idx, line) in contents.lines().enumerate() {
            match csv::decode_line(line) {
                Ok(skill) => {
                    self.index(&skill);
                    self.skills.push(skill);
                }
                Err(DecodeError::Malformed { fields }) => {
                    tracing::warn!(line = idx + 1, fields, "Skipping malformed skill line");
                }
                Err(DecodeError::InvalidYear(raw)) => {
                    tracing::error!(
                        "Load failed (invalid year {:?} on line {}), kept {} skills loaded so far",
                        raw,
                        idx + 1,
                        self.skills.len()
                    );
                    return;
                }
            }
        }

        let start = self.skills.len().saturating_sub(RECENT_CAPACITY);
        let seeds: Vec<String> = self.skills[start..]
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        for id in seeds {
            self.push_recent(id);
        }

        tracing::info!(
            "Loaded {} skills from {}",
            self.skills.len(),
            self.storage.describe()
        );
    }

    /// 整文件重写；失败只记录日志
    pub fn save_to_disk(&self) {
        if let Err(e) = self.try_save() {
            tracing::error!("Save failed ({}): {}", self.storage.describe(), e);
        }
    }

    /// 整文件重写，失败时返回 Persistence
    pub fn try_save(&self) -> Result<(), StoreError> {
        self.storage.write(&csv::encode_all(&self.skills))?;
        Ok(())
    }

    // ---------- 内部维护 ----------

    fn position(&self, id: &str) -> Option<usize> {
        self.skills.iter().position(|s| s.id() == id)
    }

    fn insert_no_undo(&mut self, skill: Skill) {
        let id = skill.id().to_string();
        self.index(&skill);
        self.skills.push(skill);
        self.push_recent(id);
    }

    fn remove_no_undo(&mut self, id: &str) -> Option<Skill> {
        let pos = self.position(id)?;
        let removed = self.skills.remove(pos);
        self.deindex(&removed);
        self.recent.retain(|x| x != id);
        Some(removed)
    }

    /// 覆盖字段并按（可能变化的）分类重新索引；id 插回桶中与主序列一致的相对位置
    fn overwrite_at(&mut self, pos: usize, data: &Skill) {
        let old = self.skills[pos].clone();
        self.deindex(&old);
        self.skills[pos].assign_fields(data);

        let skills = &self.skills;
        let updated = &skills[pos];
        let bucket = self
            .by_category
            .entry(normalize_category(&updated.category).to_string())
            .or_default();
        let at = bucket
            .iter()
            .position(|id| {
                skills
                    .iter()
                    .position(|s| s.id() == id)
                    .is_some_and(|p| p > pos)
            })
            .unwrap_or(bucket.len());
        bucket.insert(at, updated.id().to_string());
    }

    fn push_recent(&mut self, id: String) {
        self.recent.retain(|x| *x != id);
        self.recent.push_back(id);
        while self.recent.len() > RECENT_CAPACITY {
            self.recent.pop_front();
        }
    }

    fn index(&mut self, skill: &Skill) {
        self.by_category
            .entry(normalize_category(&skill.category).to_string())
            .or_default()
            .push(skill.id().to_string());
    }

    fn deindex(&mut self, skill: &Skill) {
        let key = normalize_category(&skill.category);
        let Some(bucket) = self.by_category.get_mut(key) else {
            return;
        };
        bucket.retain(|id| id != skill.id());
        if bucket.is_empty() {
            self.by_category.remove(key);
        }
    }
}

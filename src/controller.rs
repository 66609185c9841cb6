//! 控制器：展示层调用核心的唯一入口
//!
//! 增删改、撤销直接转发给 SkillStore；排序、查找在当前记录的快照上运行，不修改存储。

use crate::core::StoreError;
use crate::model::Skill;
use crate::store::SkillStore;
use crate::util::{compare_name, compare_year, exact_by_name, exact_by_year, merge_sort_by, partial_match};

#[derive(Debug)]
pub struct SkillController {
    store: SkillStore,
}

impl SkillController {
    pub fn new(store: SkillStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SkillStore {
        &self.store
    }

    // ---------- 基本信息 ----------

    pub fn all_skills(&self) -> &[Skill] {
        self.store.all_records()
    }

    pub fn total_skills(&self) -> usize {
        self.store.total_count()
    }

    pub fn category_stats(&self) -> Vec<(String, usize)> {
        self.store.category_stats()
    }

    pub fn recently_added(&self) -> Vec<&Skill> {
        self.store.recently_added()
    }

    // ---------- 增删改 ----------

    pub fn add_skill(&mut self, skill: Skill) -> Result<(), StoreError> {
        self.store.add(skill)
    }

    pub fn update_skill(&mut self, id: &str, data: &Skill) -> Result<(), StoreError> {
        self.store.update(id, data)
    }

    pub fn delete_skill(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id)
    }

    // ---------- 撤销 ----------

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn undo(&mut self) {
        self.store.undo();
    }

    // ---------- 排序 ----------

    /// 按名称（忽略大小写）排序；降序通过反转比较器实现，相等项保持原顺序
    pub fn sort_by_name(&self, ascending: bool) -> Vec<Skill> {
        if ascending {
            merge_sort_by(self.all_skills(), compare_name)
        } else {
            merge_sort_by(self.all_skills(), |a, b| compare_name(a, b).reverse())
        }
    }

    pub fn sort_by_year(&self, ascending: bool) -> Vec<Skill> {
        if ascending {
            merge_sort_by(self.all_skills(), compare_year)
        } else {
            merge_sort_by(self.all_skills(), |a, b| compare_year(a, b).reverse())
        }
    }

    // ---------- 查找 ----------

    /// 线性部分匹配（name / category / certification）
    pub fn search_partial(&self, query: &str) -> Vec<Skill> {
        partial_match(self.all_skills(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// 二分精确查找名称：先按名称升序排出快照
    pub fn search_exact_by_name(&self, name: &str) -> Option<Skill> {
        let sorted = self.sort_by_name(true);
        exact_by_name(&sorted, name).cloned()
    }

    pub fn search_exact_by_year(&self, year: i32) -> Option<Skill> {
        let sorted = self.sort_by_year(true);
        exact_by_year(&sorted, year).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProficiencyLevel;

    fn controller_with(skills: Vec<Skill>) -> SkillController {
        let mut controller = SkillController::new(SkillStore::in_memory());
        for s in skills {
            controller.add_skill(s).unwrap();
        }
        controller
    }

    #[test]
    fn test_sort_by_year_desc_keeps_tie_order() {
        let a = Skill::new("A", "x", ProficiencyLevel::Beginner, 2005, None);
        let b = Skill::new("B", "x", ProficiencyLevel::Beginner, 2001, None);
        let c = Skill::new("C", "x", ProficiencyLevel::Beginner, 2005, None);
        let controller = controller_with(vec![a, b, c]);

        let names: Vec<String> = controller.sort_by_year(false).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
        let names: Vec<String> = controller.sort_by_year(true).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let controller = controller_with(vec![
            Skill::new("banana", "x", ProficiencyLevel::Beginner, 1, None),
            Skill::new("Apple", "x", ProficiencyLevel::Beginner, 1, None),
            Skill::new("cherry", "x", ProficiencyLevel::Beginner, 1, None),
        ]);
        let names: Vec<String> = controller.sort_by_name(true).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
        let names: Vec<String> = controller.sort_by_name(false).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_sort_does_not_reorder_store() {
        let controller = controller_with(vec![
            Skill::new("Zig", "x", ProficiencyLevel::Beginner, 2024, None),
            Skill::new("Ada", "x", ProficiencyLevel::Beginner, 1980, None),
        ]);
        let _ = controller.sort_by_name(true);
        assert_eq!(controller.all_skills()[0].name, "Zig");
    }

    #[test]
    fn test_exact_searches() {
        let controller = controller_with(vec![
            Skill::new("Go", "Programming", ProficiencyLevel::Advanced, 2022, None),
            Skill::new("Rust", "Programming", ProficiencyLevel::Intermediate, 2023, None),
        ]);
        assert_eq!(controller.search_exact_by_name("rust").unwrap().year_learned, 2023);
        assert_eq!(controller.search_exact_by_year(2022).unwrap().name, "Go");
        assert!(controller.search_exact_by_year(1999).is_none());
    }
}

//! 状态定义：UiState 投影与表格视图模式
//!
//! UI 只持有轻量的 UiState（当前表格、统计、最近添加、提示）；完整数据由编排任务里的 SkillController 维护并投影到 UiState。

use std::fmt;

use serde::Serialize;

use crate::controller::SkillController;
use crate::model::Skill;

/// 表格当前展示的内容
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    #[default]
    All,
    SortedByName { ascending: bool },
    SortedByYear { ascending: bool },
    Search(String),
    ExactName(String),
    ExactYear(i32),
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = |asc: bool| if asc { "升序" } else { "降序" };
        match self {
            ViewMode::All => write!(f, "全部技能"),
            ViewMode::SortedByName { ascending } => write!(f, "按名称{}", order(*ascending)),
            ViewMode::SortedByYear { ascending } => write!(f, "按年份{}", order(*ascending)),
            ViewMode::Search(q) => write!(f, "搜索: {}", q),
            ViewMode::ExactName(name) => write!(f, "名称 = {}", name),
            ViewMode::ExactYear(year) => write!(f, "年份 = {}", year),
        }
    }
}

impl ViewMode {
    /// 在控制器的当前数据上计算该视图的行
    pub fn rows(&self, controller: &SkillController) -> Vec<Skill> {
        match self {
            ViewMode::All => controller.all_skills().to_vec(),
            ViewMode::SortedByName { ascending } => controller.sort_by_name(*ascending),
            ViewMode::SortedByYear { ascending } => controller.sort_by_year(*ascending),
            ViewMode::Search(q) => controller.search_partial(q),
            ViewMode::ExactName(name) => controller.search_exact_by_name(name).into_iter().collect(),
            ViewMode::ExactYear(year) => controller.search_exact_by_year(*year).into_iter().collect(),
        }
    }
}

/// UI 看到的「投影」状态，轻量且易于渲染
#[derive(Clone, Debug, Default, Serialize)]
pub struct UiState {
    pub rows: Vec<Skill>,
    pub view: ViewMode,
    pub total: usize,
    pub category_stats: Vec<(String, usize)>,
    /// 最近添加，从旧到新
    pub recent: Vec<Skill>,
    pub can_undo: bool,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

impl UiState {
    /// 将控制器当前状态与视图、提示合并为 UI 可渲染的快照
    pub fn project(
        controller: &SkillController,
        view: &ViewMode,
        status: Option<String>,
        error_message: Option<String>,
    ) -> Self {
        Self {
            rows: view.rows(controller),
            view: view.clone(),
            total: controller.total_skills(),
            category_stats: controller.category_stats(),
            recent: controller.recently_added().into_iter().cloned().collect(),
            can_undo: controller.can_undo(),
            status,
            error_message,
        }
    }
}

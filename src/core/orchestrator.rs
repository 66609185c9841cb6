//! 存储编排：主控循环
//!
//! 负责：按配置打开技能文件、建立 cmd/state 两通道，并在后台任务中独占 SkillController，
//! 逐条消费 UI 命令（增删改、撤销、排序、查找），每条命令处理完后发布新的 UiState。
//! 所有变更都在同一个任务里串行执行，读者只看到已发布的快照。

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::controller::SkillController;
use crate::core::{StoreError, UiState, ViewMode};
use crate::model::{Skill, UndoAction};
use crate::store::{FileStorage, SkillStore};
use crate::ui::command::HELP;

/// 从 UI 发往编排器的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Skill),
    /// 用 data 覆盖 id 对应的技能
    Update { id: String, data: Skill },
    Delete(String),
    Undo,
    /// 切换表格视图（排序 / 搜索 / 精确查找 / 全部）
    Show(ViewMode),
    /// 在状态栏显示命令用法
    Help,
    /// 退出应用
    Quit,
}

/// 按配置打开技能文件并加载；文件不存在时从空档案开始
pub fn open_controller(cfg: &AppConfig) -> SkillController {
    let path = cfg.data_file();
    tracing::info!("Using skill file {}", path.display());
    let mut store = SkillStore::new(FileStorage::new(path));
    store.load_from_disk();
    SkillController::new(store)
}

/// 将控制器移入后台任务：返回命令发送端、状态接收端，以及任务句柄（退出后交还控制器）
pub fn spawn_store(
    controller: SkillController,
) -> (
    mpsc::UnboundedSender<Command>,
    watch::Receiver<UiState>,
    JoinHandle<SkillController>,
) {
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<Command>();
    let initial = UiState::project(&controller, &ViewMode::All, None, None);
    let (state_tx, state_rx) = watch::channel(initial);

    let handle = tokio::spawn(async move {
        let mut controller = controller;
        let mut view = ViewMode::All;

        while let Some(cmd) = cmd_rx.recv().await {
            if matches!(cmd, Command::Quit) {
                break;
            }
            let (status, error_message) = match apply(&mut controller, &mut view, cmd) {
                Ok(status) => (status, None),
                Err(e) => {
                    tracing::warn!("Command rejected: {}", e);
                    (None, Some(e.to_string()))
                }
            };
            let _ = state_tx.send(UiState::project(&controller, &view, status, error_message));
        }

        controller
    });

    (cmd_tx, state_rx, handle)
}

/// 执行单条命令，返回给用户看的状态提示
fn apply(
    controller: &mut SkillController,
    view: &mut ViewMode,
    cmd: Command,
) -> Result<Option<String>, StoreError> {
    match cmd {
        Command::Add(skill) => {
            let name = skill.name.clone();
            controller.add_skill(skill)?;
            *view = ViewMode::All;
            Ok(Some(format!("已添加 '{}'", name)))
        }
        Command::Update { id, data } => {
            controller.update_skill(&id, &data)?;
            *view = ViewMode::All;
            Ok(Some(format!("已更新 '{}'", data.name)))
        }
        Command::Delete(id) => {
            let name = controller
                .store()
                .get(&id)
                .map(|s| s.name.clone())
                .unwrap_or_default();
            controller.delete_skill(&id)?;
            *view = ViewMode::All;
            Ok(Some(format!("已删除 '{}'", name)))
        }
        Command::Undo => {
            let Some(action) = controller.store().peek_undo().cloned() else {
                return Ok(Some("没有可撤销的操作".to_string()));
            };
            controller.undo();
            *view = ViewMode::All;
            Ok(Some(describe_undo(&action)))
        }
        Command::Show(next) => {
            let empty = next.rows(controller).is_empty();
            let status = match &next {
                ViewMode::ExactName(_) | ViewMode::ExactYear(_) if empty => {
                    Some("没有精确匹配".to_string())
                }
                ViewMode::Search(_) if empty => Some("没有匹配的技能".to_string()),
                _ => None,
            };
            *view = next;
            Ok(status)
        }
        Command::Help => Ok(Some(HELP.to_string())),
        Command::Quit => Ok(None),
    }
}

fn describe_undo(action: &UndoAction) -> String {
    match action {
        UndoAction::Add { after } => format!("已撤销添加 '{}'", after.name),
        UndoAction::Delete { before } => format!("已撤销删除 '{}'", before.name),
        UndoAction::Update { before, .. } => format!("已撤销对 '{}' 的修改", before.name),
    }
}

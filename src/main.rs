//! SkillTrack - 个人技能档案
//!
//! 入口：加载配置、初始化日志、打开技能文件，启动存储编排任务与 TUI，并运行主循环。

use anyhow::Context;
use skilltrack::{
    config::{load_config, AppConfig},
    core::{open_controller, spawn_store, Command},
    observability,
    ui::run_app,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (cfg, cfg_error) = match load_config(None) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // 日志：写入文件，默认 info，可通过 RUST_LOG 覆盖
    observability::init(&cfg.log_file()).context("Failed to initialize logging")?;
    if let Some(e) = cfg_error {
        tracing::warn!("Config load failed ({}), using defaults", e);
    }

    let controller = open_controller(&cfg);

    // 两通道：UI -> Core 命令；Core -> UI 状态快照
    let (cmd_tx, state_rx, handle) = spawn_store(controller);

    let ui_result = run_app(state_rx, cmd_tx.clone(), &cfg)
        .await
        .context("App run failed");

    let _ = cmd_tx.send(Command::Quit);
    let controller = handle.await.context("Store task panicked")?;
    tracing::info!("Exiting with {} skills", controller.total_skills());

    ui_result
}

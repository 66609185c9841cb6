//! 事件处理
//!
//! 轮询 crossterm 键盘事件，将 Ctrl+C / Ctrl+Q 转为退出，其余按键交给 run_app 处理；
//! Enter 时由 run_app 解析输入并通过 send 发给编排器。

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::core::Command;

/// 应用事件：退出或原始 KeyEvent
#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,
    Key(KeyEvent),
}

/// 事件处理器：持有 cmd_tx，poll 时读键盘并返回 AppEvent
pub struct EventHandler {
    cmd_tx: mpsc::UnboundedSender<Command>,
    tick: Duration,
}

impl EventHandler {
    pub fn new(cmd_tx: mpsc::UnboundedSender<Command>, tick_ms: u64) -> Self {
        Self {
            cmd_tx,
            tick: Duration::from_millis(tick_ms),
        }
    }

    pub fn poll(&self) -> anyhow::Result<Option<AppEvent>> {
        if event::poll(self.tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(Self::handle_key(key)));
                }
            }
        }
        Ok(None)
    }

    fn handle_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppEvent::Quit
            }
            _ => AppEvent::Key(key),
        }
    }

    /// 发送命令；编排任务已退出时返回 false
    pub fn send(&self, cmd: Command) -> bool {
        self.cmd_tx.send(cmd).is_ok()
    }
}

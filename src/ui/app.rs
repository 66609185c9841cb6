//! TUI 应用主循环
//!
//! 进入全屏/原始模式，轮询 state_rx 与键盘事件；Enter 时把输入解析为 Command 发送给编排器，
//! ↑↓ 移动表格选中行，每帧用 draw 渲染 UiState 与输入缓冲。

use std::io::{self, Stdout};

use crossterm::event::KeyCode;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, watch};

use crate::config::AppConfig;
use crate::core::{Command, UiState};
use crate::ui::command::parse_command;
use crate::ui::event::{AppEvent, EventHandler};
use crate::ui::render::draw;

/// 运行 TUI：启用原始模式与全屏，循环 poll 事件 + 渲染，退出时恢复终端
pub async fn run_app(
    mut state_rx: watch::Receiver<UiState>,
    cmd_tx: mpsc::UnboundedSender<Command>,
    cfg: &AppConfig,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state_rx, cmd_tx, cfg).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: &mut watch::Receiver<UiState>,
    cmd_tx: mpsc::UnboundedSender<Command>,
    cfg: &AppConfig,
) -> anyhow::Result<()> {
    let event_handler = EventHandler::new(cmd_tx, cfg.ui.tick_ms);
    let mut input_buffer = String::new();
    let mut selected: Option<usize> = None;
    // 本地输入错误（解析失败），下一次提交或收到新状态时清除
    let mut local_message: Option<String> = None;

    loop {
        if state_rx.has_changed().unwrap_or(false) {
            local_message = None;
        }
        let state = state_rx.borrow_and_update().clone();
        selected = clamp_selection(selected, state.rows.len());

        if let Some(ev) = event_handler.poll()? {
            match ev {
                AppEvent::Quit => {
                    event_handler.send(Command::Quit);
                    break;
                }
                AppEvent::Key(key) => match key.code {
                    KeyCode::Enter => {
                        let input = std::mem::take(&mut input_buffer);
                        if input.trim().is_empty() {
                            continue;
                        }
                        let current = selected.and_then(|i| state.rows.get(i));
                        match parse_command(&input, current) {
                            Ok(Command::Quit) => {
                                event_handler.send(Command::Quit);
                                break;
                            }
                            Ok(cmd) => {
                                local_message = None;
                                if !event_handler.send(cmd) {
                                    anyhow::bail!("Store task exited unexpectedly");
                                }
                            }
                            Err(e) => local_message = Some(e.to_string()),
                        }
                    }
                    KeyCode::Esc => {
                        input_buffer.clear();
                        local_message = None;
                    }
                    KeyCode::Backspace => {
                        input_buffer.pop();
                    }
                    KeyCode::Char(c) => input_buffer.push(c),
                    KeyCode::Up => {
                        selected = Some(selected.map_or(0, |i| i.saturating_sub(1)));
                    }
                    KeyCode::Down => {
                        selected = Some(selected.map_or(0, |i| i + 1));
                    }
                    KeyCode::Home => selected = Some(0),
                    KeyCode::End => selected = Some(state.rows.len().saturating_sub(1)),
                    _ => {}
                },
            }
            selected = clamp_selection(selected, state.rows.len());
        }

        terminal.draw(|f| {
            draw(
                f,
                &state,
                &input_buffer,
                selected,
                local_message.as_deref(),
                cfg.app_name(),
            );
        })?;

        tokio::task::yield_now().await;
    }

    Ok(())
}

/// 行数变化后把选中行限制在有效范围内；表格为空时取消选中
fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    selected.map(|i| i.min(len - 1))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

//! 界面渲染
//!
//! 左侧概览（总数、分类统计、最近添加），右侧技能表格（当前视图，高亮选中行），底部为输入框与提示。

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::core::UiState;
use crate::ui::command::HELP;

/// 绘制一帧；message 为本地输入错误（优先于 state 中的提示显示）
pub fn draw(
    f: &mut Frame,
    state: &UiState,
    input_buffer: &str,
    selected: Option<usize>,
    message: Option<&str>,
    app_name: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[0]);

    draw_dashboard(f, state, app_name, body[0]);
    draw_table(f, state, selected, body[1]);
    draw_input(f, state, input_buffer, message, chunks[1]);
}

fn draw_dashboard(f: &mut Frame, state: &UiState, app_name: &str, area: ratatui::layout::Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("技能总数 ", bold),
            Span::raw(state.total.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("分类", bold)),
    ];
    if state.category_stats.is_empty() {
        lines.push(Line::from(Span::styled("  (无)", Style::default().fg(Color::DarkGray))));
    }
    for (category, count) in &state.category_stats {
        lines.push(Line::from(format!("  {} · {}", category, count)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("最近添加", bold)));
    for skill in state.recent.iter().rev() {
        lines.push(Line::from(format!(
            "  {} ({}, {})",
            skill.name, skill.level, skill.year_learned
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", app_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_table(f: &mut Frame, state: &UiState, selected: Option<usize>, area: ratatui::layout::Rect) {
    let header = Row::new(vec!["名称", "分类", "等级", "年份", "证书"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows = state.rows.iter().map(|skill| {
        Row::new(vec![
            Cell::from(skill.name.clone()),
            Cell::from(skill.category.clone()),
            Cell::from(skill.level.to_string()),
            Cell::from(skill.year_learned.to_string()),
            Cell::from(skill.certification.clone().unwrap_or_default()),
        ])
    });

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(20),
        Constraint::Percentage(16),
        Constraint::Length(6),
        Constraint::Min(10),
    ];

    let undo_hint = if state.can_undo { " │ 可撤销 " } else { "" };
    let title = format!(" {} ({}){} ", state.view, state.rows.len(), undo_hint);
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_input(
    f: &mut Frame,
    state: &UiState,
    input_buffer: &str,
    message: Option<&str>,
    area: ratatui::layout::Rect,
) {
    let error = message.or(state.error_message.as_deref());
    let (title, color) = match (error, &state.status) {
        (Some(msg), _) => (format!(" 错误: {} ", msg), Color::Red),
        (None, Some(status)) => (format!(" {} ", status), Color::Green),
        (None, None) => (" 输入 ".to_string(), Color::Blue),
    };

    let input_block = Block::default()
        .title(title)
        .title_bottom(Line::from(Span::styled(
            format!(" {} │ ↑↓ 选择 │ Ctrl+Q 退出 ", HELP),
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let input = Paragraph::new(input_buffer).block(input_block);
    f.render_widget(input, area);
}

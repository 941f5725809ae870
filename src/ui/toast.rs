use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a toast notification centered above the table
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let max_width = area.width.min(80);
    let toast_width = message.width().saturating_add(6).min(max_width as usize) as u16;
    let toast_height = 3;

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + 3u16.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height.min(area.height),
    };

    f.render_widget(Clear, toast_area);

    let color = if message.starts_with("Error:") {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![Span::raw(message.to_string())]);
    let block = Block::default().borders(Borders::ALL).border_style(
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );

    let toast = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast, toast_area);
}

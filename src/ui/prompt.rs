//! Add-bookmark Prompt
//!
//! Renders the DID input box with a blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_prompt(f: &mut Frame, area: Rect, input: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add bookmark - Enter to save, Esc to cancel ")
        .style(Style::default().fg(Color::Cyan));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let line = Line::from(vec![
        Span::raw("DID: "),
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
        Span::styled("█", cursor_style),
    ]);

    f.render_widget(Paragraph::new(vec![line]).block(block), area);
}

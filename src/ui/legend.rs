use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
pub fn build_hotkey_spans(has_open_command: bool) -> Vec<Span<'static>> {
    let mut spans = vec![];

    spans.extend(key("↑/↓", ":Nav  "));
    spans.extend(key("a", ":Add  "));
    spans.extend(key("d", ":Remove  "));
    spans.extend(key("1-9", ":Networks  "));
    spans.extend(key("s", ":Sort  "));
    spans.extend(key("S", ":Reverse  "));
    spans.extend(key("w", ":Account  "));
    spans.extend(key("r", ":Refresh  "));
    if has_open_command {
        spans.extend(key("o", ":Open in market  "));
    }
    spans.extend(key("q", ":Quit"));

    spans
}

pub fn render_legend(f: &mut Frame, area: Rect, has_open_command: bool) {
    let legend = Paragraph::new(vec![Line::from(build_hotkey_spans(has_open_command))])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Hotkeys ")
                .style(Style::default().fg(Color::Gray)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(legend, area);
}

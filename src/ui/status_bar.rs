use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::AssetExtended;
use crate::logic::formatting::{format_publish_date, truncate_to_width};

/// Detail text for the selected row: full token name, DID, publish date
pub fn selected_details(record: &AssetExtended) -> String {
    let mut parts = Vec::new();

    let token = record.token_name();
    if !token.is_empty() {
        parts.push(format!("{} ({})", token, record.symbol()));
    }
    parts.push(record.did().to_string());

    let created = &record.asset.metadata.created;
    if !created.is_empty() {
        parts.push(format!("Published {}", format_publish_date(created)));
    }

    parts.join(" · ")
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    selected: Option<&AssetExtended>,
    row_count: usize,
    sort_mode: &str,
    sort_reverse: bool,
) {
    let sort_label = format!(
        "Sort: {}{} ",
        sort_mode,
        if sort_reverse { " ↓" } else { "" }
    );
    let count_label = format!("| {} shown | ", row_count);

    let used = sort_label.chars().count() + count_label.chars().count();
    let remaining = (area.width as usize).saturating_sub(used + 2);

    let details = match selected {
        Some(record) => truncate_to_width(&selected_details(record), remaining),
        None => truncate_to_width("No bookmark selected", remaining),
    };

    let line = Line::from(vec![
        Span::styled(sort_label, Style::default().fg(Color::Yellow)),
        Span::raw(count_label),
        Span::styled(details, Style::default().fg(Color::White)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Gray));

    f.render_widget(Paragraph::new(vec![line]).block(block), area);
}

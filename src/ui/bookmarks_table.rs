//! Bookmarks Table
//!
//! One row per pinned asset: title, datatoken symbol, price. No header row.
//! While a fetch runs the table is replaced by a loading message; with no
//! rows it shows the empty-state message.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::AssetExtended;
use crate::logic::formatting::format_price;

pub const LOADING_MESSAGE: &str = "Loading...";

/// Title grows, symbol and price are fixed
const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Fill(1),
    Constraint::Length(12),
    Constraint::Length(28),
];

/// Build the table row for one asset
pub fn build_row(record: &AssetExtended) -> Row<'static> {
    let mut title = vec![Span::raw(record.title().to_string())];
    if record
        .access_details
        .as_ref()
        .map(|d| d.is_owned)
        .unwrap_or(false)
    {
        title.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
    }

    let price = format_price(record.access_details.as_ref());

    Row::new(vec![
        Cell::from(Line::from(title)),
        Cell::from(record.symbol().to_string()).style(Style::default().fg(Color::Cyan)),
        Cell::from(Line::from(price).alignment(Alignment::Right)),
    ])
}

/// Single message centered in the table area
fn render_message(f: &mut Frame, area: Rect, block: Block, message: &str, style: Style) {
    let padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(message.to_string(), style));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn render_bookmarks_table(
    f: &mut Frame,
    area: Rect,
    rows: &[AssetExtended],
    is_loading: bool,
    empty_message: &str,
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Bookmarks ({}) ", rows.len()))
        .border_style(Style::default().fg(Color::Cyan));

    if is_loading {
        render_message(f, area, block, LOADING_MESSAGE, Style::default().fg(Color::Yellow));
        return;
    }

    if rows.is_empty() {
        render_message(f, area, block, empty_message, Style::default().fg(Color::Gray));
        return;
    }

    let table = Table::new(rows.iter().map(build_row), COLUMN_WIDTHS)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut state);
}

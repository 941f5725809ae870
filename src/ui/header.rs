use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::NetworkConfig;
use crate::logic::formatting::network_name;
use crate::utils::shorten_address;

/// Build header spans (extracted for testability)
///
/// Configured networks are numbered for the 1-9 toggle keys. Selected chains
/// missing from the config are listed after them, unnumbered.
pub fn build_header_spans(
    networks: &[NetworkConfig],
    chain_ids: &[u64],
    account_id: Option<&str>,
    metadata_cache_uri: Option<&str>,
) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("Networks: ")];

    for (idx, network) in networks.iter().enumerate() {
        let selected = chain_ids.contains(&network.chain_id);
        if idx < 9 {
            spans.push(Span::styled(
                format!("{}:", idx + 1),
                Style::default().fg(Color::Yellow),
            ));
        }
        let style = if selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if selected { "●" } else { "○" };
        spans.push(Span::styled(format!("{}{} ", marker, network.name), style));
    }

    for chain_id in chain_ids {
        if !networks.iter().any(|n| n.chain_id == *chain_id) {
            spans.push(Span::styled(
                format!("●{} ", network_name(*chain_id, networks)),
                Style::default().fg(Color::Green),
            ));
        }
    }

    spans.push(Span::raw("| "));
    match account_id {
        Some(account) => spans.push(Span::styled(
            format!("Account: {} ", shorten_address(account)),
            Style::default().fg(Color::Cyan),
        )),
        None => spans.push(Span::styled(
            "Not connected ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    spans.push(Span::raw("| "));
    match metadata_cache_uri {
        Some(uri) => spans.push(Span::raw(format!("Metadata: {}", uri))),
        None => spans.push(Span::styled(
            "Metadata cache not configured",
            Style::default().fg(Color::Red),
        )),
    }

    spans
}

/// Render the header bar at the top of the screen
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    networks: &[NetworkConfig],
    chain_ids: &[u64],
    account_id: Option<&str>,
    metadata_cache_uri: Option<&str>,
) {
    let line = Line::from(build_header_spans(
        networks,
        chain_ids,
        account_id,
        metadata_cache_uri,
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ocean Market Bookmarks ")
        .style(Style::default().fg(Color::Gray));

    f.render_widget(Paragraph::new(vec![line]).block(block), area);
}

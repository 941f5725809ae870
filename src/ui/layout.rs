use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top bar with network scope and account
    pub header_area: Rect,
    pub table_area: Rect,
    /// Add-bookmark input (if open)
    pub prompt_area: Option<Rect>,
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, prompt_visible: bool) -> LayoutInfo {
    let prompt_height = if prompt_visible { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (border, text, border)
            Constraint::Min(3),                // Bookmarks table
            Constraint::Length(prompt_height), // Prompt (3 lines when open, 0 when hidden)
            Constraint::Length(3),             // Legend
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        table_area: chunks[1],
        prompt_area: if prompt_visible { Some(chunks[2]) } else { None },
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}

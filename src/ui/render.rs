use crate::App;
use ratatui::Frame;

use super::{bookmarks_table, header, layout, legend, prompt, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size, app.model.ui.is_prompt_open());

    let bookmarks = &app.model.bookmarks;
    let chain_ids = bookmarks
        .deps
        .as_ref()
        .map(|deps| deps.chain_ids.as_slice())
        .unwrap_or(&[]);

    let metadata_cache_uri = app.config.metadata_cache_uri();
    header::render_header(
        f,
        layout_info.header_area,
        &app.config.networks,
        chain_ids,
        app.model.session.account_id.as_deref(),
        metadata_cache_uri.as_deref(),
    );

    bookmarks_table::render_bookmarks_table(
        f,
        layout_info.table_area,
        &bookmarks.pinned,
        bookmarks.is_loading,
        bookmarks.empty_message(),
        app.model.ui.selected_index,
    );

    if let (Some(area), Some(input)) = (layout_info.prompt_area, app.model.ui.input_prompt.as_deref()) {
        prompt::render_prompt(f, area, input);
    }

    legend::render_legend(f, layout_info.legend_area, app.config.open_command.is_some());

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.selected_asset(),
        bookmarks.pinned.len(),
        app.model.ui.sort_mode.as_str(),
        app.model.ui.sort_reverse,
    );

    if let Some((ref message, _)) = app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

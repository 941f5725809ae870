//! Sorting orchestration methods
//!
//! Sorting the bookmarks table while keeping the selected row selected.

use crate::{logic, App};

impl App {
    /// Sort displayed rows, keeping `preserve_did` (or the current row) selected
    pub(crate) fn sort_bookmarks(&mut self, preserve_did: Option<String>) {
        let selected_did = preserve_did
            .or_else(|| self.model.selected_asset().map(|a| a.did().to_string()));

        let sort_mode = self.model.ui.sort_mode;
        let reverse = self.model.ui.sort_reverse;
        let order = self.model.bookmarks.bookmark_order().to_vec();
        logic::sorting::sort_rows(&mut self.model.bookmarks.pinned, sort_mode, reverse, &order);

        let rows = &self.model.bookmarks.pinned;
        self.model.ui.selected_index = match selected_did {
            Some(did) => logic::navigation::find_index_by_did(rows, &did)
                .or(if rows.is_empty() { None } else { Some(0) }),
            None if rows.is_empty() => None,
            None => Some(0),
        };
    }

    pub fn cycle_sort_mode(&mut self) {
        self.model.ui.sort_mode = logic::ui::cycle_sort_mode(self.model.ui.sort_mode);
        self.model.ui.sort_reverse = false; // Reset reverse when changing mode
        self.sort_bookmarks(None);
    }

    pub fn toggle_sort_reverse(&mut self) {
        self.model.ui.sort_reverse = !self.model.ui.sort_reverse;
        self.sort_bookmarks(None);
    }
}

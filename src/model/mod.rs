//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//!
//! - **BookmarksModel**: dependency snapshot, displayed rows, loading flag
//! - **SessionModel**: connected account (identity provider)
//! - **UiModel**: selection, sorting, prompt, toasts
//!
//! No services live here: all I/O happens in `App` and `services`.

pub mod bookmarks;
pub mod session;
pub mod ui;

pub use bookmarks::{
    Applied, BookmarkDeps, BookmarksModel, FetchDecision, FetchOutcome, FetchRequest, FetchResult,
};
pub use session::SessionModel;
pub use ui::UiModel;

use crate::api::AssetExtended;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub bookmarks: BookmarksModel,
    pub session: SessionModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(session: SessionModel) -> Self {
        Self {
            bookmarks: BookmarksModel::new(),
            session,
            ui: UiModel::new(),
        }
    }

    /// Get the row under the cursor (if any)
    pub fn selected_asset(&self) -> Option<&AssetExtended> {
        self.ui
            .selected_index
            .and_then(|idx| self.bookmarks.pinned.get(idx))
    }

    /// Keep the selection inside the current rows
    pub fn clamp_selection(&mut self) {
        let len = self.bookmarks.pinned.len();
        self.ui.selected_index = match self.ui.selected_index {
            _ if len == 0 => None,
            Some(idx) if idx >= len => Some(len - 1),
            Some(idx) => Some(idx),
            None => Some(0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(SessionModel::default());
        assert!(model.bookmarks.pinned.is_empty());
        assert!(!model.bookmarks.is_loading);
        assert!(model.selected_asset().is_none());
        assert!(!model.ui.should_quit);
    }

    #[test]
    fn test_clamp_selection_on_empty_rows() {
        let mut model = Model::new(SessionModel::default());
        model.ui.selected_index = Some(3);
        model.clamp_selection();
        assert_eq!(model.ui.selected_index, None);
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(SessionModel::default());
        assert!(model.ui.toast_message.is_none());

        model.ui.show_toast("Bookmark added".to_string());
        assert!(model.ui.toast_message.is_some());
        assert!(!model.ui.should_dismiss_toast());

        model.ui.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }
}

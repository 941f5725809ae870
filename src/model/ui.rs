//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! selection, sorting, the add-bookmark prompt, and toasts.

use std::time::Instant;

use crate::SortMode;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Current sort mode
    pub sort_mode: SortMode,

    /// Whether sort is reversed
    pub sort_reverse: bool,

    // ============================================
    // TABLE
    // ============================================
    /// Selected row in the bookmarks table
    pub selected_index: Option<usize>,

    // ============================================
    // PROMPT & POPUPS
    // ============================================
    /// DID being typed into the add-bookmark prompt (None when closed)
    pub input_prompt: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            sort_mode: SortMode::BookmarkOrder,
            sort_reverse: false,
            selected_index: None,
            input_prompt: None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn is_prompt_open(&self) -> bool {
        self.input_prompt.is_some()
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, ts)| crate::logic::ui::should_dismiss_toast(ts.elapsed().as_millis()))
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

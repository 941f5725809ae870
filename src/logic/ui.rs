//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::SortMode;

/// Milliseconds a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Cycle to the next sort mode: Pinned → Title → Symbol → Price → Pinned
///
/// # Examples
/// ```
/// use marktui::SortMode;
/// use marktui::logic::ui::cycle_sort_mode;
///
/// assert_eq!(cycle_sort_mode(SortMode::BookmarkOrder), SortMode::Title);
/// assert_eq!(cycle_sort_mode(SortMode::Price), SortMode::BookmarkOrder);
/// ```
pub fn cycle_sort_mode(current: SortMode) -> SortMode {
    match current {
        SortMode::BookmarkOrder => SortMode::Title,
        SortMode::Title => SortMode::Symbol,
        SortMode::Symbol => SortMode::Price,
        SortMode::Price => SortMode::BookmarkOrder,
    }
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

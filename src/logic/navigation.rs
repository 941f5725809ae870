//! Navigation selection logic
//!
//! Pure functions for calculating table selection indices with wrapping behavior.

use crate::api::AssetExtended;

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use marktui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use marktui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i - 1,
    })
}

/// Find a row by DID
pub fn find_index_by_did(rows: &[AssetExtended], did: &str) -> Option<usize> {
    rows.iter().position(|row| row.did() == did)
}

/// Selection to use after removing the row at `removed`
pub fn selection_after_removal(removed: usize, remaining_len: usize) -> Option<usize> {
    if remaining_len == 0 {
        None
    } else if removed >= remaining_len {
        Some(remaining_len - 1)
    } else {
        Some(removed)
    }
}

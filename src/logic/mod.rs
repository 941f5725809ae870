//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - bookmarks: fetch preconditions, visible rows, empty-state message
//! - errors: Error classification for logs
//! - formatting: Price, network and date display
//! - navigation: Table selection calculations
//! - sorting: Row ordering for each sort mode
//! - ui: UI state transitions and cycling

pub mod bookmarks;
pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod sorting;
pub mod ui;

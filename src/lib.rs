//! Dataset Bookmarks TUI Library
//!
//! Exposes modules for the binary and for testing

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod prefs;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;

/// Sort mode for the bookmarks table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    BookmarkOrder, // Order in which datasets were pinned
    Title,         // Dataset name, case-insensitive
    Symbol,        // Datatoken symbol, case-insensitive
    Price,         // Numeric price (free = 0, unpriced last)
}

impl SortMode {
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::BookmarkOrder => "Pinned",
            SortMode::Title => "Title",
            SortMode::Symbol => "Symbol",
            SortMode::Price => "Price",
        }
    }
}

//! Event Handlers
//!
//! - keyboard: user keyboard input
//!
//! Fetch outcomes are applied by `App::handle_fetch_outcome`, since they only
//! touch the bookmarks model.

pub mod keyboard;

pub use keyboard::handle_key;

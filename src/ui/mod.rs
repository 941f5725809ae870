// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, table, prompt, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top bar (network scope, account, metadata cache)
// - bookmarks_table: Renders the bookmarks table (title, symbol, price)
// - prompt: Renders the add-bookmark input box
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with the selected asset's details
// - toast: Renders toast notifications (brief pop-up messages)

pub mod bookmarks_table;
pub mod header;
pub mod layout;
pub mod legend;
pub mod prompt;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;

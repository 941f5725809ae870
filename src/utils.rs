/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("marktui-debug.log");
    path
}

/// Get platform-specific preferences fallback directory
pub fn get_data_fallback_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("marktui-data");
    path
}

/// Shorten a hex account address for display (e.g., "0x1234…abcd")
pub fn shorten_address(address: &str) -> String {
    if address.chars().count() <= 12 {
        return address.to_string();
    }

    let head: String = address.chars().take(6).collect();
    let tail: String = address
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}…{}", head, tail)
}

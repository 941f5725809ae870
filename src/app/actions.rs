//! User actions
//!
//! Selection movement, the add-bookmark prompt, removing bookmarks,
//! toggling networks, switching accounts and opening assets.

use anyhow::Result;
use tracing::{debug, error};

use crate::logic;
use crate::utils::shorten_address;
use crate::App;

/// Longest input the add-bookmark prompt accepts
pub const MAX_PROMPT_CHARS: usize = 256;

impl App {
    // Selection

    pub fn select_next(&mut self) {
        let len = self.model.bookmarks.pinned.len();
        self.model.ui.selected_index = logic::navigation::next_selection(self.model.ui.selected_index, len);
    }

    pub fn select_prev(&mut self) {
        let len = self.model.bookmarks.pinned.len();
        self.model.ui.selected_index = logic::navigation::prev_selection(self.model.ui.selected_index, len);
    }

    pub fn select_first(&mut self) {
        if !self.model.bookmarks.pinned.is_empty() {
            self.model.ui.selected_index = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        let len = self.model.bookmarks.pinned.len();
        if len > 0 {
            self.model.ui.selected_index = Some(len - 1);
        }
    }

    // Add-bookmark prompt

    pub fn open_prompt(&mut self) {
        self.model.ui.input_prompt = Some(String::new());
    }

    pub fn cancel_prompt(&mut self) {
        self.model.ui.input_prompt = None;
    }

    pub fn prompt_push(&mut self, c: char) {
        if let Some(ref mut input) = self.model.ui.input_prompt {
            if input.chars().count() < MAX_PROMPT_CHARS {
                input.push(c);
            }
        }
    }

    pub fn prompt_pop(&mut self) {
        if let Some(ref mut input) = self.model.ui.input_prompt {
            input.pop();
        }
    }

    pub fn submit_prompt(&mut self) -> Result<()> {
        let Some(input) = self.model.ui.input_prompt.take() else {
            return Ok(());
        };
        self.add_bookmark(&input)
    }

    // Bookmarks

    /// Pin a DID; the table picks it up on the next sync
    pub fn add_bookmark(&mut self, did: &str) -> Result<()> {
        let did = did.trim();
        if did.is_empty() {
            self.model.ui.show_toast("Error: DID is empty".to_string());
            return Ok(());
        }
        if !did.starts_with("did:") {
            self.model.ui.show_toast(format!("Error: not a DID: {}", did));
            return Ok(());
        }

        if self.prefs.add_bookmark(did)? {
            debug!(did, "bookmark added");
            self.model.ui.show_toast(format!("Bookmarked {}", did));
        } else {
            self.model.ui.show_toast("Already bookmarked".to_string());
        }

        self.sync_bookmarks();
        Ok(())
    }

    /// Unpin the selected row and drop it from the table right away
    pub fn remove_selected_bookmark(&mut self) -> Result<()> {
        let Some(idx) = self.model.ui.selected_index else {
            return Ok(());
        };
        let Some(row) = self.model.bookmarks.pinned.get(idx) else {
            return Ok(());
        };

        let did = row.did().to_string();
        let title = row.title().to_string();

        if self.prefs.remove_bookmark(&did)? {
            debug!(did = %did, "bookmark removed");
        }

        self.model.bookmarks.pinned.remove(idx);
        let remaining = self.model.bookmarks.pinned.len();
        self.model.ui.selected_index = logic::navigation::selection_after_removal(idx, remaining);
        self.model.ui.show_toast(format!("Removed {}", title));

        self.sync_bookmarks();
        Ok(())
    }

    // Network scope

    /// Toggle the `index`-th configured network (0-based)
    pub fn toggle_network(&mut self, index: usize) -> Result<()> {
        let Some(network) = self.config.networks.get(index) else {
            return Ok(());
        };
        let (chain_id, name) = (network.chain_id, network.name.clone());

        let selected = self.prefs.toggle_chain_id(chain_id)?;
        debug!(chain_id, selected, "network scope changed");
        self.model.ui.show_toast(format!(
            "{} {}",
            name,
            if selected { "selected" } else { "deselected" }
        ));

        self.sync_bookmarks();
        Ok(())
    }

    // Identity

    pub fn cycle_account(&mut self) {
        self.model.session.cycle_account();

        let message = match self.model.session.account_id {
            Some(ref account) => format!("Connected {}", shorten_address(account)),
            None if self.model.session.accounts.is_empty() => {
                "No accounts configured".to_string()
            }
            None => "Disconnected".to_string(),
        };
        self.model.ui.show_toast(message);

        self.sync_bookmarks();
    }

    // Market

    /// Market page of an asset
    pub fn asset_url(&self, did: &str) -> String {
        format!(
            "{}/asset/{}",
            self.config.market_uri.trim_end_matches('/'),
            urlencoding::encode(did)
        )
    }

    /// Open the selected asset's market page with `open_command`
    pub fn open_selected_asset(&mut self) -> Result<()> {
        let Some(ref open_cmd) = self.config.open_command else {
            self.model.ui.show_toast("Error: open_command not configured".to_string());
            return Ok(());
        };
        let Some(row) = self.model.selected_asset() else {
            return Ok(());
        };

        let url = self.asset_url(row.did());

        // Spawn without waiting so GUI browsers don't block the TUI
        let result = std::process::Command::new(open_cmd)
            .arg(&url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                debug!(command = %open_cmd, url = %url, "opened asset");
                self.model.ui.show_toast(format!("Opening {}", url));
            }
            Err(e) => {
                error!("Failed to execute open_command '{}': {}", open_cmd, e);
                let message = format!("Error: Failed to open with '{}'", open_cmd);
                self.model.ui.show_toast(message);
            }
        }

        Ok(())
    }
}

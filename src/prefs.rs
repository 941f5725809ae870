use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

/// User preferences: pinned DIDs and the selected network scope
pub struct PreferencesDb {
    conn: Connection,
}

impl PreferencesDb {
    pub fn new() -> Result<Self> {
        let data_dir = Self::get_data_dir();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;

        let db_path = data_dir.join("preferences.db");
        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open {}", db_path.display()))?;

        Self::with_connection(conn)
    }

    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let mut prefs = PreferencesDb { conn };
        prefs.init_schema()?;
        Ok(prefs)
    }

    fn get_data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("marktui")
        } else {
            crate::utils::get_data_fallback_path()
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS bookmarks (
                did TEXT PRIMARY KEY,
                position INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS selected_chains (
                chain_id INTEGER PRIMARY KEY
            );

            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    // Bookmarks

    /// Pinned DIDs in the order they were added
    pub fn bookmarks(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT did FROM bookmarks ORDER BY position ASC")?;

        let dids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(dids)
    }

    pub fn is_bookmarked(&self, did: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM bookmarks WHERE did = ?1",
                params![did],
                |row| row.get(0),
            )
            .optional()?;

        Ok(found.is_some())
    }

    /// Pin a DID at the end of the list. Returns false if it was already pinned.
    pub fn add_bookmark(&self, did: &str) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO bookmarks (did, position)
             VALUES (?1, (SELECT COALESCE(MAX(position), -1) + 1 FROM bookmarks))",
            params![did],
        )?;

        Ok(inserted > 0)
    }

    /// Unpin a DID. Returns false if it was not pinned.
    pub fn remove_bookmark(&self, did: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM bookmarks WHERE did = ?1", params![did])?;

        Ok(removed > 0)
    }

    // Network scope

    pub fn chain_ids(&self) -> Result<Vec<u64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT chain_id FROM selected_chains ORDER BY chain_id ASC")?;

        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))?
            .map(|r| r.map(|id| id as u64))
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(ids)
    }

    pub fn set_chain_ids(&self, chain_ids: &[u64]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute("DELETE FROM selected_chains", [])?;
        {
            let mut stmt = tx.prepare("INSERT OR IGNORE INTO selected_chains (chain_id) VALUES (?1)")?;
            for chain_id in chain_ids {
                stmt.execute(params![*chain_id as i64])?;
            }
        }
        tx.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES ('chains_initialized', '1')",
            [],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Add or remove a chain from the scope. Returns whether it is now selected.
    pub fn toggle_chain_id(&self, chain_id: u64) -> Result<bool> {
        let mut chain_ids = self.chain_ids()?;

        let selected = if let Some(pos) = chain_ids.iter().position(|id| *id == chain_id) {
            chain_ids.remove(pos);
            false
        } else {
            chain_ids.push(chain_id);
            true
        };

        self.set_chain_ids(&chain_ids)?;
        Ok(selected)
    }

    /// Seed the scope on first run only; later runs keep the stored selection,
    /// even when the user deselected every network.
    pub fn init_chain_ids(&self, defaults: &[u64]) -> Result<()> {
        let initialized: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'chains_initialized'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        if initialized.is_none() {
            self.set_chain_ids(defaults)?;
        }

        Ok(())
    }
}

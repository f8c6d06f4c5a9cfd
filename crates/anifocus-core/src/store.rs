//! JSON-file-backed storage for the user's library.
//!
//! The whole library is a single JSON array, read once at startup and
//! rewritten wholesale after every mutation. At library-tracker scale a
//! linear scan over the array covers every lookup.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::AnifocusError;
use crate::models::{LibraryEntry, WatchStatus};

pub struct LibraryStore {
    path: PathBuf,
    entries: Vec<LibraryEntry>,
}

impl LibraryStore {
    /// Load the library from the given file.
    ///
    /// A missing file is a fresh install and an unreadable one is
    /// discarded with a warning; both start the user with an empty
    /// library rather than an error.
    pub fn load(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Discarding unreadable library file: {e}");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&LibraryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries with the given status, in library order.
    pub fn by_status(&self, status: WatchStatus) -> Vec<&LibraryEntry> {
        self.entries.iter().filter(|e| e.status == status).collect()
    }

    /// Insert the entry, replacing any existing entry with the same id.
    pub fn upsert(&mut self, entry: LibraryEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self.persist();
    }

    /// Remove the entry with the given id. Returns whether it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// The watch-again action: back to plan-to-watch with no progress.
    /// Returns the reset entry, or `None` if the id is not in the library.
    pub fn watch_again(&mut self, id: u64) -> Option<LibraryEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.status = WatchStatus::PlanToWatch;
        entry.watched_episodes = 0;
        entry.updated_at = Utc::now();
        let entry = entry.clone();
        self.persist();
        Some(entry)
    }

    /// Serialize the full array back to the file.
    ///
    /// Write errors are logged but not propagated; the in-memory library
    /// stays current either way.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("Failed to persist library: {e}");
        }
    }

    fn try_persist(&self) -> Result<(), AnifocusError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

//! Card view-model: the merge of catalog and library data the grid draws.

use chrono::{DateTime, Utc};

use anifocus_api::CatalogEntry;
use anifocus_core::models::{LibraryEntry, WatchStatus};

/// Which grid is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// The remote catalog.
    #[default]
    All,
    /// One library status tab.
    Status(WatchStatus),
}

impl Tab {
    /// Progress and the watch-again affordance only appear on library tabs.
    pub fn in_library(self) -> bool {
        !matches!(self, Tab::All)
    }
}

/// Everything the grid needs to draw one card.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub score: Option<f32>,
    pub episodes: Option<u32>,
    pub cover_url: Option<String>,
    pub progress: Option<Progress>,
    pub watch_again: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Watch progress shown on library-tab cards.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub watched: u32,
    pub total: Option<u32>,
    pub percent: f32,
}

/// Percentage watched, clamped to 100. `None` when the total is unknown.
pub fn percent(watched: u32, total: Option<u32>) -> Option<f32> {
    let total = total.filter(|&t| t > 0)?;
    Some(((watched as f32 / total as f32) * 100.0).min(100.0))
}

/// Merge a catalog entry with its library entry, if tracked.
pub fn merge(entry: &CatalogEntry, existing: Option<&LibraryEntry>, tab: Tab) -> Card {
    // Prefer the fresh episode count, fall back to what was stored.
    let episodes = entry.episodes.or(existing.and_then(|e| e.episodes));

    let progress = existing.filter(|_| tab.in_library()).map(|e| Progress {
        watched: e.watched_episodes,
        total: episodes,
        percent: percent(e.watched_episodes, episodes).unwrap_or(0.0),
    });

    let watch_again = existing
        .map(|e| e.status == WatchStatus::Completed && tab.in_library())
        .unwrap_or(false);

    Card {
        id: entry.id,
        title: entry.preferred_title().to_string(),
        score: entry.score,
        episodes,
        cover_url: entry.cover_url.clone(),
        progress,
        watch_again,
        updated_at: existing.map(|e| e.updated_at),
    }
}

/// Card for a stored entry on a library tab, without a fresh catalog record.
pub fn from_library(entry: &LibraryEntry, tab: Tab) -> Card {
    merge(&catalog_view(entry), Some(entry), tab)
}

/// Project a stored entry back into catalog shape for display.
pub fn catalog_view(entry: &LibraryEntry) -> CatalogEntry {
    CatalogEntry {
        id: entry.id,
        title: entry.title.clone(),
        title_english: None,
        episodes: entry.episodes,
        cover_url: entry.cover_url.clone(),
        score: entry.score,
        synopsis: entry.synopsis.clone(),
    }
}

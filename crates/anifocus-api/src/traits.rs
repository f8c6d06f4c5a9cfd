//! Trait definition for catalog backends.
//!
//! The app talks to the catalog through this trait, so dispatch logic
//! and tests don't care which backend serves the titles.

use std::future::Future;

/// A read-only catalog of anime titles.
pub trait CatalogService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the "top anime" listing.
    fn top_anime(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, Self::Error>> + Send;

    /// Search the catalog by free-text query.
    fn search_anime(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<CatalogEntry>, Self::Error>> + Send;

    /// Fetch a single title by its catalog id.
    fn anime_by_id(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<CatalogEntry, Self::Error>> + Send;
}

/// A single title from the catalog.
///
/// Fetched fresh per request and never persisted directly; the library
/// keeps its own copy of the fields it needs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub title: String,
    pub title_english: Option<String>,
    pub episodes: Option<u32>,
    pub cover_url: Option<String>,
    pub score: Option<f32>,
    pub synopsis: Option<String>,
}

impl CatalogEntry {
    /// Returns the best available display title.
    pub fn preferred_title(&self) -> &str {
        self.title_english.as_deref().unwrap_or(&self.title)
    }
}

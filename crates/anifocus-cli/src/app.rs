//! Application state and command dispatch.
//!
//! One `App` value owns the config, the library store, and the catalog
//! service; every UI action becomes a `Command`, and dispatch turns it
//! into a `View` for the renderer. No other state exists.

use chrono::Utc;

use anifocus_api::{CatalogEntry, CatalogService};
use anifocus_core::config::AppConfig;
use anifocus_core::error::AnifocusError;
use anifocus_core::models::{LibraryEntry, WatchStatus};
use anifocus_core::rules;
use anifocus_core::store::LibraryStore;

use crate::card::{self, Card, Tab};
use crate::format;

/// Application state passed through every dispatch and render call.
pub struct App<S> {
    pub config: AppConfig,
    pub store: LibraryStore,
    service: S,
}

/// Commands the UI surface can issue.
#[derive(Debug, Clone)]
pub enum Command {
    ShowTop,
    Search {
        query: String,
    },
    ShowLibrary {
        status: Option<WatchStatus>,
    },
    ShowDetail {
        id: u64,
    },
    /// The editor's save path: omitted fields keep their current value
    /// (or the editor defaults for an untracked title).
    Save {
        id: u64,
        status: Option<WatchStatus>,
        episodes: Option<u32>,
    },
    Delete {
        id: u64,
    },
    WatchAgain {
        id: u64,
    },
}

/// What the renderer should draw after a command.
#[derive(Debug)]
pub enum View {
    Grid { tab: Tab, cards: Vec<Card> },
    Sections(Vec<(WatchStatus, Vec<Card>)>),
    Detail(Box<Detail>),
    Notice(String),
}

/// Data for the detail view.
#[derive(Debug)]
pub struct Detail {
    pub entry: CatalogEntry,
    pub tracked: Option<(WatchStatus, u32)>,
}

fn catalog_err<E: std::error::Error>(e: E) -> AnifocusError {
    AnifocusError::Catalog(e.to_string())
}

impl<S: CatalogService> App<S> {
    pub fn new(config: AppConfig, store: LibraryStore, service: S) -> Self {
        Self {
            config,
            store,
            service,
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<View, AnifocusError> {
        match command {
            Command::ShowTop => {
                let entries = self.service.top_anime().await.map_err(catalog_err)?;
                Ok(View::Grid {
                    tab: Tab::All,
                    cards: self.catalog_cards(&entries),
                })
            }
            Command::Search { query } => {
                let query = query.trim();
                if query.is_empty() {
                    return Ok(View::Notice("Nothing to search for.".into()));
                }
                let entries = self
                    .service
                    .search_anime(query)
                    .await
                    .map_err(catalog_err)?;
                Ok(View::Grid {
                    tab: Tab::All,
                    cards: self.catalog_cards(&entries),
                })
            }
            Command::ShowLibrary {
                status: Some(status),
            } => {
                let tab = Tab::Status(status);
                let cards: Vec<Card> = self
                    .store
                    .by_status(status)
                    .into_iter()
                    .map(|e| card::from_library(e, tab))
                    .collect();
                if cards.is_empty() {
                    return Ok(View::Notice(format!(
                        "No anime found in \"{}\".",
                        status.as_tag()
                    )));
                }
                Ok(View::Grid { tab, cards })
            }
            Command::ShowLibrary { status: None } => {
                let sections = WatchStatus::ALL
                    .iter()
                    .map(|&status| {
                        let cards = self
                            .store
                            .by_status(status)
                            .into_iter()
                            .map(|e| card::from_library(e, Tab::Status(status)))
                            .collect();
                        (status, cards)
                    })
                    .collect();
                Ok(View::Sections(sections))
            }
            Command::ShowDetail { id } => {
                let detail = match self.store.get(id) {
                    Some(entry) => Detail {
                        entry: card::catalog_view(entry),
                        tracked: Some((entry.status, entry.watched_episodes)),
                    },
                    None => Detail {
                        entry: self.service.anime_by_id(id).await.map_err(catalog_err)?,
                        tracked: None,
                    },
                };
                Ok(View::Detail(Box::new(detail)))
            }
            Command::Save {
                id,
                status,
                episodes,
            } => self.save(id, status, episodes).await,
            Command::Delete { id } => {
                let title = match self.store.get(id) {
                    Some(entry) => entry.title.clone(),
                    None => return Ok(View::Notice(format!("{id} is not in your library."))),
                };
                self.store.remove(id);
                Ok(View::Notice(format!("Removed \"{title}\" from your list.")))
            }
            Command::WatchAgain { id } => match self.store.watch_again(id) {
                Some(entry) => Ok(View::Notice(format!(
                    "Moved \"{}\" to Plan to Watch.",
                    entry.title
                ))),
                None => Ok(View::Notice(format!("{id} is not in your library."))),
            },
        }
    }

    /// Apply the save rules and upsert the resulting entry.
    ///
    /// A tracked title is edited in place from its stored values; an
    /// untracked one is fetched from the catalog and starts from the
    /// editor defaults (watching, zero episodes).
    async fn save(
        &mut self,
        id: u64,
        status: Option<WatchStatus>,
        episodes: Option<u32>,
    ) -> Result<View, AnifocusError> {
        let entry = match self.store.get(id).cloned() {
            Some(mut entry) => {
                let status = status.unwrap_or(entry.status);
                let watched = episodes.unwrap_or(entry.watched_episodes);
                let resolved = rules::resolve_save(status, watched, entry.known_total());
                entry.status = resolved.status;
                entry.watched_episodes = resolved.watched;
                entry.updated_at = Utc::now();
                entry
            }
            None => {
                let catalog = self.service.anime_by_id(id).await.map_err(catalog_err)?;
                let status = status.unwrap_or(WatchStatus::Watching);
                let watched = episodes.unwrap_or(0);
                let total = catalog.episodes.filter(|&t| t > 0);
                let resolved = rules::resolve_save(status, watched, total);
                LibraryEntry {
                    id: catalog.id,
                    title: catalog.preferred_title().to_string(),
                    cover_url: catalog.cover_url,
                    episodes: catalog.episodes,
                    score: catalog.score,
                    synopsis: catalog.synopsis,
                    status: resolved.status,
                    watched_episodes: resolved.watched,
                    updated_at: Utc::now(),
                }
            }
        };

        let line = format!(
            "List updated: \"{}\" ({}, {} / {} episodes).",
            entry.title,
            entry.status,
            entry.watched_episodes,
            format::episode_count(entry.episodes)
        );
        self.store.upsert(entry);
        Ok(View::Notice(line))
    }

    fn catalog_cards(&self, entries: &[CatalogEntry]) -> Vec<Card> {
        entries
            .iter()
            .map(|e| card::merge(e, self.store.get(e.id), Tab::All))
            .collect()
    }
}

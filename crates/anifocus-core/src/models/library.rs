use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User's watch status for a library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    PlanToWatch,
    Watching,
    Completed,
}

impl WatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlanToWatch => "Plan to Watch",
            Self::Watching => "Watching",
            Self::Completed => "Completed",
        }
    }

    /// Stable identifier used in the persisted JSON and as tab name.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::PlanToWatch => "plan_to_watch",
            Self::Watching => "watching",
            Self::Completed => "completed",
        }
    }

    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "plan_to_watch" => Some(Self::PlanToWatch),
            "watching" => Some(Self::Watching),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub const ALL: &[WatchStatus] = &[Self::PlanToWatch, Self::Watching, Self::Completed];
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked anime in the user's library.
///
/// Carries its own copy of the catalog fields so library tabs render
/// without a network round-trip. The id is the catalog (MAL) id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub id: u64,
    pub title: String,
    pub cover_url: Option<String>,
    pub episodes: Option<u32>,
    pub score: Option<f32>,
    pub synopsis: Option<String>,
    pub status: WatchStatus,
    pub watched_episodes: u32,
    pub updated_at: DateTime<Utc>,
}

impl LibraryEntry {
    /// Total episode count, if the catalog knows it and it is non-zero.
    pub fn known_total(&self) -> Option<u32> {
        self.episodes.filter(|&t| t > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tag_roundtrip() {
        for status in WatchStatus::ALL {
            assert_eq!(WatchStatus::from_tag(status.as_tag()), Some(*status));
        }
        assert_eq!(WatchStatus::from_tag("dropped"), None);
    }

    #[test]
    fn test_status_serializes_as_tag() {
        let json = serde_json::to_string(&WatchStatus::PlanToWatch).unwrap();
        assert_eq!(json, "\"plan_to_watch\"");
        let status: WatchStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, WatchStatus::Completed);
    }
}

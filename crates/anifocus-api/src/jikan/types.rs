use serde::Deserialize;

use crate::traits::CatalogEntry;

// ── List / single-record envelopes ──────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JikanListResponse {
    pub data: Vec<JikanAnime>,
}

#[derive(Debug, Deserialize)]
pub struct JikanSingleResponse {
    pub data: JikanAnime,
}

#[derive(Debug, Deserialize)]
pub struct JikanAnime {
    pub mal_id: u64,
    pub title: String,
    pub title_english: Option<String>,
    pub images: Option<JikanImages>,
    pub episodes: Option<u32>,
    pub score: Option<f32>,
    pub synopsis: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

// ── Conversion to the shared trait type ─────────────────────────

impl JikanAnime {
    pub fn into_catalog_entry(self) -> CatalogEntry {
        let cover_url = self
            .images
            .and_then(|imgs| imgs.jpg)
            .and_then(|jpg| jpg.large_image_url.or(jpg.image_url));
        CatalogEntry {
            id: self.mal_id,
            title: self.title,
            title_english: self.title_english,
            episodes: self.episodes,
            cover_url,
            score: self.score,
            synopsis: self.synopsis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_response() {
        let json = r#"{
            "data": [
                {
                    "mal_id": 52991,
                    "title": "Sousou no Frieren",
                    "title_english": "Frieren: Beyond Journey's End",
                    "images": {
                        "jpg": {
                            "image_url": "https://cdn.myanimelist.net/images/anime/1015/138006.jpg",
                            "small_image_url": "https://cdn.myanimelist.net/images/anime/1015/138006t.jpg",
                            "large_image_url": "https://cdn.myanimelist.net/images/anime/1015/138006l.jpg"
                        }
                    },
                    "episodes": 28,
                    "status": "Finished Airing",
                    "score": 9.32,
                    "synopsis": "After the party defeats the Demon King..."
                }
            ],
            "pagination": {
                "has_next_page": true,
                "current_page": 1
            }
        }"#;

        let resp: JikanListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);

        let entry = resp.data.into_iter().next().unwrap().into_catalog_entry();
        assert_eq!(entry.id, 52991);
        assert_eq!(entry.title, "Sousou no Frieren");
        assert_eq!(
            entry.preferred_title(),
            "Frieren: Beyond Journey's End"
        );
        assert_eq!(entry.episodes, Some(28));
        assert_eq!(
            entry.cover_url.as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/1015/138006l.jpg")
        );
        assert_eq!(entry.score, Some(9.32));
    }

    #[test]
    fn test_deserialize_single_response() {
        let json = r#"{
            "data": {
                "mal_id": 1,
                "title": "Cowboy Bebop",
                "title_english": "Cowboy Bebop",
                "episodes": 26,
                "score": 8.75
            }
        }"#;

        let resp: JikanSingleResponse = serde_json::from_str(json).unwrap();
        let entry = resp.data.into_catalog_entry();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.episodes, Some(26));
        assert!(entry.cover_url.is_none());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        // Airing shows often have null episodes/score, and the English
        // title is null for most non-licensed titles.
        let json = r#"{
            "mal_id": 30,
            "title": "Neon Genesis Evangelion",
            "title_english": null,
            "episodes": null,
            "score": null,
            "synopsis": null
        }"#;

        let anime: JikanAnime = serde_json::from_str(json).unwrap();
        let entry = anime.into_catalog_entry();
        assert_eq!(entry.preferred_title(), "Neon Genesis Evangelion");
        assert!(entry.episodes.is_none());
        assert!(entry.score.is_none());
    }

    #[test]
    fn test_cover_falls_back_to_image_url() {
        let json = r#"{
            "mal_id": 5,
            "title": "Test",
            "images": { "jpg": { "image_url": "https://example.com/t.jpg" } }
        }"#;

        let anime: JikanAnime = serde_json::from_str(json).unwrap();
        let entry = anime.into_catalog_entry();
        assert_eq!(entry.cover_url.as_deref(), Some("https://example.com/t.jpg"));
    }
}

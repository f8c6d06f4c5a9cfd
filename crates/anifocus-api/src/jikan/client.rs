use reqwest::Client;
use url::Url;

use super::error::JikanError;
use super::types::{JikanListResponse, JikanSingleResponse};
use crate::traits::{CatalogEntry, CatalogService};

const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Jikan (unofficial MyAnimeList) API v4 client.
///
/// Jikan is read-only and unauthenticated, so the client is just a base
/// URL and a connection pool.
pub struct JikanClient {
    base: Url,
    http: Client,
}

impl JikanClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL).expect("default base URL is valid")
    }

    /// Client pointed at a custom API root, e.g. from config.
    pub fn with_base_url(base: &str) -> Result<Self, JikanError> {
        let base = Url::parse(base.trim_end_matches('/'))
            .map_err(|e| JikanError::BaseUrl(format!("{base}: {e}")))?;
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JikanError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "Jikan API error");
            Err(JikanError::Api {
                status,
                message: body,
            })
        }
    }

    async fn get_list(&self, req: reqwest::RequestBuilder) -> Result<Vec<CatalogEntry>, JikanError> {
        let resp = Self::check_response(req.send().await?).await?;
        let list: JikanListResponse = resp
            .json()
            .await
            .map_err(|e| JikanError::Parse(e.to_string()))?;
        Ok(list
            .data
            .into_iter()
            .map(|a| a.into_catalog_entry())
            .collect())
    }
}

impl Default for JikanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService for JikanClient {
    type Error = JikanError;

    async fn top_anime(&self) -> Result<Vec<CatalogEntry>, JikanError> {
        self.get_list(self.http.get(format!("{}/top/anime", self.base)))
            .await
    }

    async fn search_anime(&self, query: &str) -> Result<Vec<CatalogEntry>, JikanError> {
        self.get_list(
            self.http
                .get(format!("{}/anime", self.base))
                .query(&[("q", query)]),
        )
        .await
    }

    async fn anime_by_id(&self, id: u64) -> Result<CatalogEntry, JikanError> {
        let resp = self
            .http
            .get(format!("{}/anime/{id}", self.base))
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let single: JikanSingleResponse = resp
            .json()
            .await
            .map_err(|e| JikanError::Parse(e.to_string()))?;

        Ok(single.data.into_catalog_entry())
    }
}

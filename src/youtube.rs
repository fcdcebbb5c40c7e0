use anyhow::{Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::api::models::Video;
use crate::config::Config;

const MAX_RESULTS: u32 = 3;

/// Client for the YouTube Data v3 search endpoint.
pub struct VideoSearchClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: Option<SearchItemId>,
    #[serde(default)]
    snippet: Option<SearchItemSnippet>,
}

#[derive(Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct SearchItemSnippet {
    #[serde(default)]
    title: Option<String>,
}

impl VideoSearchClient {
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.youtube_api_key, &config.youtube_base_url)
    }

    pub fn new(api_key: &str, base_url: &str) -> Self {
        VideoSearchClient {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns up to 3 videos for `query`. Items with a missing id or title
    /// keep an empty string for that field, matching the lenient treatment
    /// of partial snippets elsewhere in the pipeline.
    pub async fn search(&self, query: &str) -> Result<Vec<Video>> {
        debug!(%query, "searching videos");

        let max_results = MAX_RESULTS.to_string();
        let params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
            ("key", self.api_key.as_str()),
        ];

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(anyhow!(
                "YouTube API error: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ));
        }

        let parsed: SearchListResponse = response.json().await?;
        let videos = parsed
            .items
            .into_iter()
            .map(|item| Video {
                id: item.id.and_then(|id| id.video_id).unwrap_or_default(),
                title: item
                    .snippet
                    .and_then(|s| s.title)
                    .unwrap_or_default(),
            })
            .collect();

        Ok(videos)
    }
}

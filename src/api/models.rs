use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    // Defaulted so an absent query gets the same rejection as an empty one.
    #[serde(default)]
    pub query: String,
    #[serde(rename = "previousResults", default)]
    pub previous_results: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<String>,
    pub papers: Vec<Paper>,
    #[serde(rename = "youtubeResults")]
    pub youtube_results: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paper {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

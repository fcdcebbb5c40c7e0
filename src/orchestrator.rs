use thiserror::Error;
use tracing::{error, warn};

use crate::api::models::{Paper, SearchResponse};
use crate::llm::CompletionClient;
use crate::youtube::VideoSearchClient;

/// Fatal outcomes of a search. Video-search failures never show up here,
/// they degrade to an empty list inside the fan-out.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to generate facts")]
    FactGeneration(#[source] anyhow::Error),
    #[error("Failed to generate paper recommendations")]
    PaperGeneration(#[source] anyhow::Error),
    #[error("No facts generated")]
    NoFacts,
}

/// Runs one search end to end: builds the two prompts, fans out the three
/// upstream calls, joins them, and shapes the combined response. Stateless
/// across requests.
pub struct Orchestrator {
    llm: CompletionClient,
    videos: VideoSearchClient,
}

impl Orchestrator {
    pub fn new(llm: CompletionClient, videos: VideoSearchClient) -> Self {
        Orchestrator { llm, videos }
    }

    pub async fn search(
        &self,
        query: &str,
        previous_results: Option<&[String]>,
    ) -> Result<SearchResponse, SearchError> {
        let fact_prompt = fact_prompt(query, previous_results);
        let paper_prompt = paper_prompt(query);

        // Join point: all three branches settle before we inspect anything.
        // The video branch catches its own failure so the join never has to
        // special-case it.
        let (fact_text, paper_text, youtube_results) = tokio::join!(
            self.llm.complete(&fact_prompt),
            self.llm.complete(&paper_prompt),
            async {
                match self.videos.search(query).await {
                    Ok(videos) => videos,
                    Err(e) => {
                        warn!("video search failed, degrading to no videos: {e:#}");
                        Vec::new()
                    }
                }
            },
        );

        let fact_text = fact_text.map_err(|e| {
            error!("fact completion failed: {e:#}");
            SearchError::FactGeneration(e)
        })?;
        let paper_text = paper_text.map_err(|e| {
            error!("paper completion failed: {e:#}");
            SearchError::PaperGeneration(e)
        })?;

        let results = split_facts(&fact_text);
        if results.is_empty() {
            // Upstream answered, but with nothing usable.
            return Err(SearchError::NoFacts);
        }

        let papers = parse_papers(&paper_text);

        Ok(SearchResponse {
            results,
            papers,
            youtube_results,
        })
    }
}

fn fact_prompt(query: &str, previous_results: Option<&[String]>) -> String {
    let previous = match previous_results {
        Some(prev) => serde_json::to_string(prev).unwrap_or_default(),
        None => "No previous results".to_string(),
    };
    format!(
        "You are Stargaze, an AI assistant specializing in space phenomena. \
         Provide 3 to 5 interesting facts or explanations about \"{query}\" related to space. \
         Present each fact or explanation as a separate, concise paragraph that's easy to understand. \
         Use asterisks (*) to highlight important terms or concepts. \
         If there are previous results, build upon that information: {previous}."
    )
}

fn paper_prompt(query: &str) -> String {
    format!(
        "You are a research assistant specializing in space science. \
         Provide 3 to 5 relevant research paper titles and URLs about \"{query}\" \
         in the format: Title: [title], URL: [url]. \
         Only include papers from reputable scientific journals or space agencies (e.g., NASA, ESA). \
         Ensure all URLs are valid, accessible, and start with https://. \
         Do not generate or guess URLs; only provide real, existing papers."
    )
}

/// Splits completion text into fact paragraphs on blank-line boundaries,
/// dropping whitespace-only segments.
pub fn split_facts(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `Title: <t>, URL: <u>` lines into papers. Lines that don't split
/// on the separator or whose URL isn't https are dropped silently; this is
/// a lenient filter, not an error path.
pub fn parse_papers(text: &str) -> Vec<Paper> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let (title_part, url_part) = line.split_once(", URL: ")?;
            let title = title_part.trim();
            let title = title.strip_prefix("Title: ").unwrap_or(title).trim();
            let url = url_part.trim();
            if !url.starts_with("https://") {
                return None;
            }
            Some(Paper {
                title: title.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}

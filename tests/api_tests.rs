use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use stargaze::api;
use stargaze::llm::CompletionClient;
use stargaze::orchestrator::Orchestrator;
use stargaze::youtube::VideoSearchClient;

mod test_helpers {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};

    pub async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn completion_stub(fail_facts: bool) -> Router {
        Router::new().route(
            "/chat/completions",
            post(move |Json(body): Json<Value>| async move {
                let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
                let is_paper = prompt.starts_with("You are a research assistant");
                if !is_paper && fail_facts {
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
                let content = if is_paper {
                    "Title: A, URL: https://arxiv.org/abs/1"
                } else {
                    "One paragraph.\n\nAnother paragraph."
                };
                Json(json!({
                    "choices": [
                        { "message": { "role": "assistant", "content": content } }
                    ]
                }))
                .into_response()
            }),
        )
    }

    pub fn youtube_stub() -> Router {
        Router::new().route(
            "/search",
            get(|| async {
                Json(json!({
                    "items": [
                        { "id": { "videoId": "vid1" }, "snippet": { "title": "T1" } }
                    ]
                }))
            }),
        )
    }
}

use test_helpers::*;

fn router_with(llm_base: &str, youtube_base: &str) -> Router {
    let orchestrator = Arc::new(Orchestrator::new(
        CompletionClient::new("test-key", llm_base, "test-model"),
        VideoSearchClient::new("test-key", youtube_base),
    ));
    api::create_router(orchestrator)
}

/// Router whose upstream clients point at unroutable addresses; used for
/// cases that must be rejected before any upstream call is made.
fn router_without_upstreams() -> Router {
    router_with("http://127.0.0.1:1", "http://127.0.0.1:1")
}

async fn post_search(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let (status, body) = post_search(router_without_upstreams(), json!({ "query": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query is required");
}

#[tokio::test]
async fn missing_query_is_rejected() {
    let (status, body) = post_search(router_without_upstreams(), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query is required");
}

#[tokio::test]
async fn whitespace_query_is_rejected() {
    let (status, body) = post_search(router_without_upstreams(), json!({ "query": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query is required");
}

#[tokio::test]
async fn successful_search_returns_combined_payload() {
    let llm = spawn_stub(completion_stub(false)).await;
    let yt = spawn_stub(youtube_stub()).await;

    let (status, body) =
        post_search(router_with(&llm, &yt), json!({ "query": "black holes" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["papers"][0]["title"], "A");
    assert_eq!(body["papers"][0]["url"], "https://arxiv.org/abs/1");
    assert_eq!(body["youtubeResults"][0]["id"], "vid1");
    assert_eq!(body["youtubeResults"][0]["title"], "T1");
}

#[tokio::test]
async fn previous_results_are_accepted() {
    let llm = spawn_stub(completion_stub(false)).await;
    let yt = spawn_stub(youtube_stub()).await;

    let (status, _body) = post_search(
        router_with(&llm, &yt),
        json!({ "query": "black holes", "previousResults": ["earlier fact"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn fatal_upstream_failure_maps_to_server_error() {
    let llm = spawn_stub(completion_stub(true)).await;
    let yt = spawn_stub(youtube_stub()).await;

    let (status, body) =
        post_search(router_with(&llm, &yt), json!({ "query": "black holes" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "An error occurred while processing your request: Failed to generate facts"
    );
}

use std::sync::Arc;

use stargaze::api;
use stargaze::config::CONFIG;
use stargaze::llm::CompletionClient;
use stargaze::orchestrator::Orchestrator;
use stargaze::youtube::VideoSearchClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    let llm = CompletionClient::from_config(&CONFIG);
    let videos = VideoSearchClient::from_config(&CONFIG);
    let orchestrator = Arc::new(Orchestrator::new(llm, videos));

    let app = api::create_router(orchestrator);
    let listener = tokio::net::TcpListener::bind(&CONFIG.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

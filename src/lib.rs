pub mod api;
pub mod config;
pub mod llm;
pub mod orchestrator;
pub mod youtube;

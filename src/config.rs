use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        groq_api_key: get_env("GROQ_API_KEY"),
        youtube_api_key: get_env("YOUTUBE_API_KEY"),
        llm_base_url: get_env_or_default("LLM_BASE_URL", "https://api.groq.com/openai/v1"),
        llm_model: get_env_or_default("LLM_MODEL", "llama-3.3-70b-versatile"),
        youtube_base_url: get_env_or_default(
            "YOUTUBE_BASE_URL",
            "https://www.googleapis.com/youtube/v3",
        ),
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:3000"),
    }
});

pub struct Config {
    pub groq_api_key: String,
    pub youtube_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub youtube_base_url: String,
    pub bind_addr: String,
}

fn get_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("Missing required environment variable: {key}"))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

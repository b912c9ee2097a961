use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// The API key is optional — its absence only disables model-backed features;
/// everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_api_key: Option<String>,
    pub cv_data_path: String,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            azure_api_key: optional_env("AZURE_API_KEY"),
            cv_data_path: std::env::var("CV_DATA_PATH").unwrap_or_else(|_| "data.txt".to_string()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "frontend".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset and empty values the same — an empty key cannot authenticate.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Gemini API key
    pub gemini_api_key: String,

    /// Gemini API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Gemini model used for title generation
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Google Books API base URL
    #[serde(default = "default_books_api_url")]
    pub books_api_url: String,

    /// Google Books API key (the volumes endpoint works without one)
    #[serde(default)]
    pub books_api_key: Option<String>,

    /// Pause between consecutive catalog lookups, in milliseconds
    #[serde(default = "default_lookup_delay_ms")]
    pub lookup_delay_ms: u64,

    /// Number of personalized recommendations requested from the model
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Default size of the trending and top-rated lists
    #[serde(default = "default_showcase_count")]
    pub showcase_count: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_books_api_url() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

fn default_lookup_delay_ms() -> u64 {
    500
}

fn default_recommendation_count() -> usize {
    5
}

fn default_showcase_count() -> usize {
    12
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

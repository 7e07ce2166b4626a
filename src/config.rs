use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// API token for the generative text service
    pub generation_api_key: String,

    /// Generative text service base URL
    #[serde(default = "default_generation_api_url")]
    pub generation_api_url: String,

    /// Model identifier used for recommendation generation
    #[serde(default = "default_generation_model")]
    pub generation_model: String,

    /// Sampling temperature passed to the model
    #[serde(default = "default_generation_temperature")]
    pub generation_temperature: f64,

    /// Timeout for generation calls, in seconds
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,

    /// Game catalog API key
    pub catalog_api_key: String,

    /// Game catalog API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Base URL used to build store page links from catalog slugs
    #[serde(default = "default_catalog_store_url")]
    pub catalog_store_url: String,

    /// Timeout for each catalog lookup, in seconds
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Number of recommendations requested per call
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_generation_api_url() -> String {
    "https://api.replicate.com".to_string()
}

fn default_generation_model() -> String {
    "ibm-granite/granite-3.3-8b-instruct".to_string()
}

fn default_generation_temperature() -> f64 {
    0.9
}

fn default_generation_timeout_secs() -> u64 {
    30
}

fn default_catalog_api_url() -> String {
    "https://api.rawg.io/api".to_string()
}

fn default_catalog_store_url() -> String {
    "https://rawg.io".to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    5
}

fn default_recommendation_count() -> usize {
    3
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

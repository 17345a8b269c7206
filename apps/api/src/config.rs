use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required: without an API key the service runs fully offline.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Enables the LLM enhancer when set and non-empty.
    pub anthropic_api_key: Option<String>,
    /// Seeds the story, naming and sensory random source.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            rng_seed: optional_env("VERA_RNG_SEED")
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("VERA_RNG_SEED must be an unsigned integer")?,
        })
    }
}

/// Reads `key`, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

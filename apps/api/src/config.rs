use thiserror::Error;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEMPERATURE: f32 = 0.15;
const DEFAULT_MAX_TOKENS: u32 = 850;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "Required environment variable '{key}' is not set. \
        Export it or add it to a .env file before starting the service."
    )]
    Missing { key: &'static str },

    #[error("Environment variable '{key}' is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration loaded from environment variables.
/// Resolved once at startup and passed explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub llm_timeout_secs: u64,
    /// Default output language for letters. Requests may override it.
    pub letter_language: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            openai_api_key: get("OPENAI_API_KEY").ok_or(ConfigError::Missing {
                key: "OPENAI_API_KEY",
            })?,
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            temperature: parse_or("LLM_TEMPERATURE", get("LLM_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_output_tokens: parse_or("LLM_MAX_TOKENS", get("LLM_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?,
            llm_timeout_secs: parse_or(
                "LLM_TIMEOUT_SECS",
                get("LLM_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )?,
            letter_language: get("LETTER_LANGUAGE"),
            port: parse_or("PORT", get("PORT"), 8080u16)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: format!("'{value}': {e}"),
        }),
    }
}

use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_QUERY: &str =
    r#"site:instagram.com "@gmail.com" OR "@hotmail.com" OR "@outlook.com" OR "@yahoo.com""#;

#[derive(Clone, Debug)]
pub struct Config {
    // Sender account
    pub sender_email: String,
    pub sender_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,

    // Search API
    pub serpapi_key: String,
    pub search_endpoint: Url,
    pub search_query: String,
    pub search_num_results: u32,

    // Enrichment API
    pub apollo_api_key: String,
    pub apollo_endpoint: Url,

    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let sender_email = required("EMAIL_ADDRESS")?;
        let sender_password = required("EMAIL_PASSWORD")?;
        let serpapi_key = required("SERPAPI_KEY")?;
        let apollo_api_key = required("APOLLO_API_KEY")?;

        let smtp_host = optional("SMTP_HOST", "smtp.gmail.com");
        let smtp_port = optional("SMTP_PORT", "587")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { key: "SMTP_PORT", reason: e.to_string() })?;

        let search_endpoint = parse_url("SEARCH_ENDPOINT", &optional("SEARCH_ENDPOINT", "https://serpapi.com/search"))?;
        let search_query = optional("SEARCH_QUERY", DEFAULT_QUERY);
        let search_num_results = optional("SEARCH_NUM_RESULTS", "10")
            .parse::<u32>()
            .map_err(|e| ConfigError::Invalid { key: "SEARCH_NUM_RESULTS", reason: e.to_string() })?;

        let apollo_endpoint = parse_url(
            "APOLLO_ENDPOINT",
            &optional("APOLLO_ENDPOINT", "https://api.apollo.io/v1/people/match"),
        )?;
        let output_dir = PathBuf::from(optional("OUTPUT_DIR", "."));

        Ok(Self {
            sender_email,
            sender_password,
            smtp_host,
            smtp_port,
            serpapi_key,
            search_endpoint,
            search_query,
            search_num_results,
            apollo_api_key,
            apollo_endpoint,
            output_dir,
        })
    }

    pub fn masked_sender(&self) -> String {
        format!("{}:***@{}:{}", self.sender_email, self.smtp_host, self.smtp_port)
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::Invalid { key, reason: e.to_string() })
}

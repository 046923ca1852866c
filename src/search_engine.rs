use reqwest::blocking::Client;
use std::time::Duration;
use log::{info, warn, error};
use url::Url;

use crate::config::Config;
use crate::models::SearchResponse;

/// Anything that can answer a search query with organic results.
pub trait SearchSource {
    fn search(&self, query: &str, num_results: u32) -> Option<SearchResponse>;
}

pub struct SearchEngine {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl SearchEngine {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(SearchEngine {
            client,
            endpoint: config.search_endpoint.clone(),
            api_key: config.serpapi_key.clone(),
        })
    }

    fn query_params<'a>(&'a self, query: &'a str, num_results: &'a str) -> [(&'static str, &'a str); 6] {
        [
            ("engine", "google"),
            ("q", query),
            ("num", num_results),
            ("hl", "en"),
            ("gl", "ke"),
            ("api_key", self.api_key.as_str()),
        ]
    }
}

impl SearchSource for SearchEngine {
    fn search(&self, query: &str, num_results: u32) -> Option<SearchResponse> {
        info!("Searching for: '{}' (up to {} results)", query, num_results);
        let num = num_results.to_string();

        let resp = match self.client
            .get(self.endpoint.clone())
            .query(&self.query_params(query, &num))
            .send()
        {
            Ok(resp) => resp,
            Err(e) => {
                error!("Search request failed: {}", e);
                return None;
            }
        };

        if resp.status() != reqwest::StatusCode::OK {
            warn!("Search failed with status: {}", resp.status());
            return None;
        }

        match resp.json::<SearchResponse>() {
            Ok(body) => {
                info!("Search returned {} organic results", body.organic_results.len());
                Some(body)
            }
            Err(e) => {
                error!("Failed to decode search response: {}", e);
                None
            }
        }
    }
}

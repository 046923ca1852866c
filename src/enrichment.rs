use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::{json, Value};
use std::time::Duration;
use log::{debug, warn, error};
use url::Url;

use crate::config::Config;
use crate::models::BLANK_PLACEHOLDER;

/// Resolves an email address to a job title. Unknown titles come back as
/// [`BLANK_PLACEHOLDER`], never as an error.
pub trait TitleLookup {
    fn job_title(&self, email: &str) -> String;
}

pub struct ApolloClient {
    client: Client,
    endpoint: Url,
}

impl ApolloClient {
    pub fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&config.apollo_api_key)?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), key);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(ApolloClient {
            client,
            endpoint: config.apollo_endpoint.clone(),
        })
    }
}

impl TitleLookup for ApolloClient {
    fn job_title(&self, email: &str) -> String {
        let resp = match self.client
            .post(self.endpoint.clone())
            .json(&json!({ "email": email }))
            .send()
        {
            Ok(resp) => resp,
            Err(e) => {
                error!("Enrichment request for {} failed: {}", email, e);
                return BLANK_PLACEHOLDER.to_string();
            }
        };

        if resp.status() != reqwest::StatusCode::OK {
            warn!("Enrichment for {} returned status {}", email, resp.status());
            return BLANK_PLACEHOLDER.to_string();
        }

        match resp.json::<Value>() {
            Ok(body) => {
                let title = title_from_match(&body);
                debug!("Enrichment for {} -> {:?}", email, title);
                title
            }
            Err(e) => {
                warn!("Could not decode enrichment response for {}: {}", email, e);
                BLANK_PLACEHOLDER.to_string()
            }
        }
    }
}

/// Pulls `person.title` out of a people-match body.
pub fn title_from_match(body: &Value) -> String {
    body.get("person")
        .and_then(|person| person.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| BLANK_PLACEHOLDER.to_string())
}

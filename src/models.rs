use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel for an unknown name or job title. An API that returns an empty
/// title ends up looking the same.
pub const BLANK_PLACEHOLDER: &str = " ";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippet: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub organic_results: Vec<SearchResult>,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "LinkedIn Profile")]
    pub profile_link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRecord {
    pub name: String,
    pub email: String,
    pub outcome: DeliveryOutcome,
}

impl DeliveryRecord {
    pub fn report_line(&self) -> String {
        format!("{}: {}", self.name, self.email)
    }
}

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod search_engine;
pub mod enrichment;
pub mod extractor;
pub mod contact_store;
pub mod templates;
pub mod mailer;
pub mod report;
pub mod pipeline;

// Exporting types for convenience
pub use config::Config;
pub use models::{Contact, DeliveryOutcome, DeliveryRecord, SearchResult};
pub use search_engine::{SearchEngine, SearchSource};
pub use enrichment::{ApolloClient, TitleLookup};
pub use extractor::Extractor;
pub use mailer::{MailTransport, SmtpMailer};
pub use pipeline::RunSummary;

#[cfg(test)]
mod test_server;

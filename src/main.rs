use profile_outreach_lib::{logger, pipeline, mailer::SmtpConfig};
use profile_outreach_lib::{ApolloClient, Config, SearchEngine, SmtpMailer};

use std::error::Error;
use log::{info, error};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting profile outreach run...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    let search_engine = SearchEngine::new(&config)?;
    let apollo = ApolloClient::new(&config)?;
    let smtp = SmtpMailer::new(SmtpConfig::from(&config));

    match pipeline::run(&config, &search_engine, &apollo, &smtp)? {
        Some(summary) => info!(
            "Run completed. {} contacts, {} emails sent, {} failed.",
            summary.contacts, summary.sent, summary.failed
        ),
        None => info!("Run completed with no search results. No files written."),
    }
    Ok(())
}

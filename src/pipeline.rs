use log::{debug, info, warn};

use crate::config::Config;
use crate::contact_store::{self, CONTACTS_FILE};
use crate::enrichment::TitleLookup;
use crate::error::PipelineError;
use crate::extractor::Extractor;
use crate::mailer::{self, MailTransport};
use crate::search_engine::SearchSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub contacts: usize,
    pub sent: usize,
    pub failed: usize,
}

/// search -> extract + enrich -> save CSV -> mail loop -> report files.
///
/// Returns `Ok(None)` when the search produced no organic results; nothing is
/// written to disk in that case.
pub fn run(
    config: &Config,
    search: &dyn SearchSource,
    lookup: &dyn TitleLookup,
    transport: &dyn MailTransport,
) -> Result<Option<RunSummary>, PipelineError> {
    let results = match search.search(&config.search_query, config.search_num_results) {
        Some(response) if !response.organic_results.is_empty() => response.organic_results,
        Some(_) => {
            warn!("Search returned no organic results. Nothing to do.");
            return Ok(None);
        }
        None => {
            warn!("Search failed. Nothing to do.");
            return Ok(None);
        }
    };

    let contacts = Extractor::new().extract_contacts(&results, lookup);
    debug!("Extracted profiles: {:?}", contacts);

    contact_store::save_contacts(config.output_dir.join(CONTACTS_FILE), &contacts)?;

    info!("Sending outreach to {} contacts as {}", contacts.len(), config.masked_sender());
    let report = mailer::deliver_all(transport, &contacts, &config.sender_email);
    report.log_summary();
    report.write_files(&config.output_dir)?;

    Ok(Some(RunSummary {
        contacts: contacts.len(),
        sent: report.succeeded.len(),
        failed: report.failed.len(),
    }))
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use log::info;

use crate::models::{DeliveryOutcome, DeliveryRecord};

pub const SUCCESS_FILE: &str = "success_emails.txt";
pub const FAILED_FILE: &str = "failed_emails.txt";

#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub succeeded: Vec<DeliveryRecord>,
    pub failed: Vec<DeliveryRecord>,
}

impl DeliveryReport {
    pub fn record(&mut self, record: DeliveryRecord) {
        match record.outcome {
            DeliveryOutcome::Sent => self.succeeded.push(record),
            DeliveryOutcome::Failed(_) => self.failed.push(record),
        }
    }

    pub fn log_summary(&self) {
        info!("Emails sent successfully:");
        for record in &self.succeeded {
            info!("{}", record.report_line());
        }
        info!("Emails that failed to send:");
        for record in &self.failed {
            info!("{}", record.report_line());
        }
    }

    /// Writes both lists into `dir`, truncating earlier runs.
    pub fn write_files<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<()> {
        let dir = dir.as_ref();
        write_list(&dir.join(SUCCESS_FILE), &self.succeeded)?;
        write_list(&dir.join(FAILED_FILE), &self.failed)?;
        info!(
            "Wrote {} successes and {} failures to {:?}",
            self.succeeded.len(),
            self.failed.len(),
            dir
        );
        Ok(())
    }
}

fn write_list(path: &Path, records: &[DeliveryRecord]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(out, "{}", record.report_line())?;
    }
    out.flush()
}

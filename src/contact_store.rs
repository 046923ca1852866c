use std::fs::File;
use std::path::Path;
use log::info;

use crate::models::Contact;

pub const CONTACTS_FILE: &str = "linkedin_contacts.csv";

/// Writes every contact under a fixed header, replacing whatever was at `path`.
pub fn save_contacts<P: AsRef<Path>>(path: P, contacts: &[Contact]) -> Result<(), csv::Error> {
    let path = path.as_ref();
    let file = File::create(path)?;

    // Header is written by hand so an empty run still gets one. Rows end in CRLF.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);
    writer.write_record(["Name", "Email", "Job Title", "LinkedIn Profile"])?;
    for contact in contacts {
        writer.serialize(contact)?;
    }
    writer.flush()?;

    info!("Saved {} contacts to {:?}", contacts.len(), path);
    Ok(())
}

use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{info, error};

use crate::config::Config;
use crate::error::MailError;
use crate::models::{Contact, DeliveryOutcome, DeliveryRecord};
use crate::report::DeliveryReport;
use crate::templates::{render_outreach, EmailTemplate};

/// Delivers one rendered message.
pub trait MailTransport {
    fn send(&self, email: &EmailTemplate) -> Result<(), MailError>;
}

pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl From<&Config> for SmtpConfig {
    fn from(config: &Config) -> Self {
        SmtpConfig {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            username: config.sender_email.clone(),
            password: config.sender_password.clone(),
        }
    }
}

/// STARTTLS relay client. Opens a fresh connection for every message and
/// closes it once the message is accepted or refused.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        SmtpMailer { config }
    }
}

pub fn build_message(email: &EmailTemplate) -> Result<Message, MailError> {
    let from: Mailbox = email.from.parse()?;
    let to: Mailbox = email.to.parse()?;

    let msg = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())?;
    Ok(msg)
}

impl MailTransport for SmtpMailer {
    fn send(&self, email: &EmailTemplate) -> Result<(), MailError> {
        let msg = build_message(email)?;

        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());
        let transport = SmtpTransport::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(creds)
            .build();

        transport.send(&msg)?;
        Ok(())
    }
}

/// Sends the outreach message to every contact in order. A failed send is
/// logged and recorded; the loop always reaches the last contact.
pub fn deliver_all(transport: &dyn MailTransport, contacts: &[Contact], from: &str) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for contact in contacts {
        let email = render_outreach(contact, from);
        let outcome = match transport.send(&email) {
            Ok(()) => {
                info!("Email sent to {} at {}", contact.name, contact.email);
                DeliveryOutcome::Sent
            }
            Err(e) => {
                error!("Failed to send email to {}: {}", contact.email, e);
                DeliveryOutcome::Failed(e.to_string())
            }
        };

        report.record(DeliveryRecord {
            name: contact.name.clone(),
            email: contact.email.clone(),
            outcome,
        });
    }

    report
}

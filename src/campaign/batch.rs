//! Batch controller: runs the send pipeline over an uploaded contact sheet.
//!
//! For every eligible row, in file order:
//! 1. `is_valid_email()`: invalid addresses are recorded and skipped
//! 2. `compose_greeting()` + `Template::render()`
//! 3. `Mailer::send()`: only a 202 counts as sent
//!
//! A failed send never stops the batch. A template that cannot be read does.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::greeting::compose_greeting;
use super::report::{DeliveryOutcome, Report};
use super::template::Template;
use super::validate::is_valid_email;
use crate::config::Config;
use crate::contacts::ContactRecord;
use crate::delivery::{Mailer, SendResult};
use crate::error::TemplateError;

/// Sends one personalized message per eligible contact.
pub struct Campaign {
    mailer: Arc<dyn Mailer>,
    template_path: PathBuf,
    subject: String,
}

impl Campaign {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        template_path: impl Into<PathBuf>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            template_path: template_path.into(),
            subject: subject.into(),
        }
    }

    /// Build a campaign using the configured template and subject.
    pub fn from_config(config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        Self::new(mailer, config.template_path.clone(), config.subject.clone())
    }

    /// Process every row whose `Envoyé` column is exactly `Faux`.
    ///
    /// The template is read once, on the first valid address, and reused
    /// for the rest of the batch.
    pub async fn run(&self, contacts: &[ContactRecord]) -> Result<Report, TemplateError> {
        let batch_id = Uuid::new_v4();
        let eligible: Vec<&ContactRecord> =
            contacts.iter().filter(|c| c.is_eligible()).collect();

        info!(
            batch_id = %batch_id,
            rows = contacts.len(),
            eligible = eligible.len(),
            mailer = self.mailer.name(),
            "Starting email batch"
        );

        let mut report = Report::default();
        let mut loaded: Option<Template> = None;

        for contact in eligible {
            if !is_valid_email(&contact.email) {
                warn!(
                    batch_id = %batch_id,
                    email = %contact.email,
                    "Invalid email address, skipping"
                );
                report.record(&contact.email, DeliveryOutcome::InvalidAddress);
                continue;
            }

            let template = match loaded.take() {
                Some(t) => t,
                None => Template::load(&self.template_path).await?,
            };
            let outcome = self.deliver(contact, &template).await;
            loaded = Some(template);

            debug!(batch_id = %batch_id, email = %contact.email, ?outcome, "Contact processed");
            report.record(&contact.email, outcome);
        }

        info!(
            batch_id = %batch_id,
            total = report.total_processed,
            sent = report.emails_sent,
            invalid = report.invalid_count(),
            failed = report.failed_count,
            "Email batch finished"
        );

        Ok(report)
    }

    async fn deliver(&self, contact: &ContactRecord, template: &Template) -> DeliveryOutcome {
        let greeting = compose_greeting(
            contact.responsible_name.as_deref(),
            contact.gender(),
            &contact.company_name,
        );
        let html = template.render(&greeting);

        match self.mailer.send(&contact.email, &self.subject, &html).await {
            result if result.is_accepted() => DeliveryOutcome::Sent,
            SendResult::Sent(status) => {
                warn!(
                    email = %contact.email,
                    status = status.as_u16(),
                    "Provider did not accept message"
                );
                DeliveryOutcome::SendFailed
            }
            SendResult::ProviderError(e) => {
                warn!(email = %contact.email, error = %e, "Delivery failed");
                DeliveryOutcome::SendFailed
            }
        }
    }
}

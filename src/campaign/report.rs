//! Per-batch outcome tallies and the JSON response body.

use serde::Serialize;

/// What happened to one eligible contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Provider accepted the message (202).
    Sent,
    /// Address failed the syntax check; nothing was sent.
    InvalidAddress,
    /// Provider errored or answered with a status other than 202.
    SendFailed,
}

/// Aggregate of one batch run.
///
/// `emails_sent + invalid_count + failed_count == total_processed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub total_processed: usize,
    pub emails_sent: usize,
    pub failed_count: usize,
    /// Invalid addresses in file order.
    pub invalid_emails: Vec<String>,
}

impl Report {
    /// Fold one contact's outcome into the tallies.
    pub fn record(&mut self, email: &str, outcome: DeliveryOutcome) {
        self.total_processed += 1;
        match outcome {
            DeliveryOutcome::Sent => self.emails_sent += 1,
            DeliveryOutcome::InvalidAddress => self.invalid_emails.push(email.to_string()),
            DeliveryOutcome::SendFailed => self.failed_count += 1,
        }
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_emails.len()
    }

    /// Response body for `POST /send-emails`.
    ///
    /// Failed sends are deliberately absent: callers only see them as the
    /// gap between `total_processed` and the other two counts.
    pub fn to_body(&self) -> ReportBody {
        let has_invalid = !self.invalid_emails.is_empty();
        ReportBody {
            message: format!(
                "Emails sent successfully to {} recipients",
                self.emails_sent
            ),
            total_processed: self.total_processed,
            emails_sent: self.emails_sent,
            warning: has_invalid.then_some("Some emails were invalid and were not sent"),
            invalid_emails: has_invalid.then(|| self.invalid_emails.clone()),
            invalid_count: has_invalid.then(|| self.invalid_count()),
        }
    }
}

/// Serialized batch summary.
#[derive(Debug, Clone, Serialize)]
pub struct ReportBody {
    pub message: String,
    pub total_processed: usize,
    pub emails_sent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_count: Option<usize>,
}

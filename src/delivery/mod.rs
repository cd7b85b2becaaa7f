//! Outbound delivery through a transactional email provider.
//!
//! `Mailer` is the seam between the batch and the provider: the batch only
//! sees a `SendResult`, never a propagated error, so one recipient's failure
//! cannot abort the rest of the batch.

pub mod sendgrid;

pub use sendgrid::SendGridMailer;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::DeliveryError;

/// Provider status meaning the message was queued for delivery.
pub const ACCEPTED: StatusCode = StatusCode::ACCEPTED;

/// Result of handing one message to the provider.
#[derive(Debug)]
pub enum SendResult {
    /// The provider answered with this status.
    Sent(StatusCode),
    /// The call failed (transport error, or the provider rejected the request).
    ProviderError(DeliveryError),
}

impl SendResult {
    /// Whether the provider accepted the message (202).
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Sent(status) if *status == ACCEPTED)
    }
}

/// Something that can send one HTML email.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Send `html` to `to` with `subject`. Never returns an `Err`; failures
    /// come back as `SendResult::ProviderError`.
    async fn send(&self, to: &str, subject: &str, html: &str) -> SendResult;
}

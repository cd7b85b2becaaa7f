//! SendGrid v3 `mail/send` client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use super::{Mailer, SendResult};
use crate::config::Config;
use crate::error::DeliveryError;

/// Sends HTML email through the SendGrid REST API.
pub struct SendGridMailer {
    client: reqwest::Client,
    api_key: SecretString,
    from_address: String,
    endpoint: String,
}

impl SendGridMailer {
    /// Build a mailer from service configuration.
    pub fn new(config: &Config) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(config.send_timeout)
            .build()
            .map_err(|e| DeliveryError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            endpoint: format!("{}/mail/send", config.api_base),
        })
    }

    /// Full URL of the send endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<reqwest::StatusCode, DeliveryError> {
        let payload = build_payload(&self.from_address, to, subject, html);

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(status)
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    fn name(&self) -> &str {
        "sendgrid"
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> SendResult {
        match self.post(to, subject, html).await {
            Ok(status) => {
                tracing::debug!(to, status = status.as_u16(), "SendGrid answered");
                SendResult::Sent(status)
            }
            Err(e) => {
                tracing::warn!(to, error = %e, "SendGrid send failed");
                SendResult::ProviderError(e)
            }
        }
    }
}

/// JSON body for a single-recipient HTML message.
pub fn build_payload(from: &str, to: &str, subject: &str, html: &str) -> Value {
    json!({
        "personalizations": [{
            "to": [{ "email": to }],
        }],
        "from": { "email": from },
        "subject": subject,
        "content": [{
            "type": "text/html",
            "value": html,
        }],
    })
}

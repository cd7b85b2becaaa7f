//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Sender address used when `MAILER_FROM_ADDRESS` is not set.
pub const DEFAULT_FROM_ADDRESS: &str = "info@iwalink.ch";

/// Subject line used when `MAILER_SUBJECT` is not set.
pub const DEFAULT_SUBJECT: &str = "Opportunité unique pour développer votre activité";

/// SendGrid v3 API root.
pub const DEFAULT_API_BASE: &str = "https://api.sendgrid.com/v3";

/// Service configuration, built once at startup and passed to the mailer and router.
#[derive(Debug, Clone)]
pub struct Config {
    /// SendGrid API key. Redacted in `Debug` output.
    pub api_key: SecretString,
    /// Fixed sender address for every message.
    pub from_address: String,
    /// Subject line for every message.
    pub subject: String,
    /// Path of the HTML template containing the `{greeting}` placeholder.
    pub template_path: PathBuf,
    /// HTTP listen port.
    pub port: u16,
    /// Provider API root (override to point at a sandbox).
    pub api_base: String,
    /// Timeout for a single provider request.
    pub send_timeout: Duration,
    /// Maximum accepted upload body size in bytes.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Fails if `SENDGRID_API_KEY` is missing or empty, so a misconfigured
    /// process stops at startup instead of on the first send.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SENDGRID_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SENDGRID_API_KEY".into()))?;

        let from_address =
            lookup("MAILER_FROM_ADDRESS").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string());
        let subject = lookup("MAILER_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
        let template_path = lookup("MAILER_TEMPLATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("email_template.html"));
        let api_base = lookup("SENDGRID_API_BASE")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let port: u16 = parse_or(&lookup, "MAILER_PORT", 5000)?;
        let timeout_secs: u64 = parse_or(&lookup, "MAILER_SEND_TIMEOUT_SECS", 30)?;
        let max_upload_bytes: usize =
            parse_or(&lookup, "MAILER_MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            from_address,
            subject,
            template_path,
            port,
            api_base,
            send_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{raw}': {e}"),
        }),
    }
}

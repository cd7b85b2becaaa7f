//! Error types for the campaign mailer.

use std::path::PathBuf;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level error type for the upload endpoint.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] CsvError),

    #[error("Email template unavailable: {0}")]
    Template(#[from] TemplateError),
}

impl Error {
    /// HTTP status reported to the caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upload(UploadError::TooLarge(_)) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upload(_) | Self::Csv(_) => StatusCode::BAD_REQUEST,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Problems with the shape of the upload request. The batch never starts.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    NoSelectedFile,

    #[error("Invalid file format. Please upload a CSV file.")]
    InvalidExtension,

    #[error("Upload exceeds the maximum size: {0}")]
    TooLarge(String),

    #[error("Malformed multipart body: {0}")]
    Multipart(String),
}

/// Errors decoding the uploaded contact sheet.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row on line {line} is missing its '{column}' cell")]
    MissingCell { line: u64, column: String },

    #[error("row on line {line} has {found} fields, the header has {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Read(#[from] csv::Error),
}

/// Errors loading the HTML template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template not found at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors talking to the email provider.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_errors_render_client_messages() {
        assert_eq!(Error::from(UploadError::MissingFilePart).to_string(), "No file part");
        assert_eq!(Error::from(UploadError::NoSelectedFile).to_string(), "No selected file");
        assert_eq!(
            Error::from(UploadError::InvalidExtension).to_string(),
            "Invalid file format. Please upload a CSV file."
        );
    }

    #[test]
    fn status_codes_by_category() {
        assert_eq!(
            Error::from(UploadError::InvalidExtension).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::from(CsvError::MissingColumn("email".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::from(UploadError::TooLarge("limit".into())).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );

        let template = TemplateError::NotFound {
            path: PathBuf::from("missing.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            Error::from(template).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn csv_error_message_is_prefixed() {
        let err = Error::from(CsvError::MissingColumn("Envoyé".into()));
        assert_eq!(
            err.to_string(),
            "Failed to parse CSV: missing required column 'Envoyé'"
        );
    }
}

//! HTTP surface: `POST /send-emails` upload endpoint and health check.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::campaign::{Campaign, ReportBody};
use crate::contacts::parse_contacts;
use crate::error::{Error, UploadError};

/// Name of the multipart field carrying the contact sheet.
pub const FILE_FIELD: &str = "file";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub campaign: Arc<Campaign>,
}

/// Build the Axum router for the mailer.
pub fn mailer_routes(campaign: Arc<Campaign>, max_upload_bytes: usize) -> Router {
    let state = AppState { campaign };

    Router::new()
        .route("/health", get(health))
        .route("/send-emails", post(send_emails))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "campaign-mailer"
    }))
}

// ── Upload ──────────────────────────────────────────────────────────────

/// The uploaded file part.
struct Upload {
    filename: String,
    data: Vec<u8>,
}

async fn send_emails(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ReportBody>, Error> {
    // A body that is not multipart at all carries no file part either.
    let mut multipart = multipart.map_err(|_| UploadError::MissingFilePart)?;

    let upload = read_file_part(&mut multipart)
        .await?
        .ok_or(UploadError::MissingFilePart)?;
    check_filename(&upload.filename)?;

    info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Contact sheet uploaded"
    );

    let contacts = parse_contacts(&upload.data)?;
    let report = state.campaign.run(&contacts).await?;

    Ok(Json(report.to_body()))
}

/// Return the first part named `file` that carries a filename.
async fn read_file_part(multipart: &mut Multipart) -> Result<Option<Upload>, UploadError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(Upload {
            filename,
            data: data.to_vec(),
        }));
    }
    Ok(None)
}

fn multipart_error(e: MultipartError) -> UploadError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge(e.body_text())
    } else {
        UploadError::Multipart(e.body_text())
    }
}

/// Reject empty filenames and anything not ending in `.csv`.
pub fn check_filename(filename: &str) -> Result<(), UploadError> {
    if filename.is_empty() {
        return Err(UploadError::NoSelectedFile);
    }
    if !filename.ends_with(".csv") {
        return Err(UploadError::InvalidExtension);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_checks() {
        assert!(check_filename("contacts.csv").is_ok());
        assert!(check_filename("export.2024.csv").is_ok());
        assert!(matches!(check_filename(""), Err(UploadError::NoSelectedFile)));
        assert!(matches!(
            check_filename("contacts.xlsx"),
            Err(UploadError::InvalidExtension)
        ));
        assert!(matches!(
            check_filename("contacts.csv.txt"),
            Err(UploadError::InvalidExtension)
        ));
        assert!(matches!(
            check_filename("CONTACTS.CSV"),
            Err(UploadError::InvalidExtension)
        ));
    }
}

//! HTML message template with a single salutation placeholder.

use std::path::Path;

use crate::error::TemplateError;

/// Literal token replaced with the recipient's salutation.
pub const GREETING_PLACEHOLDER: &str = "{greeting}";

/// A loaded HTML template. Immutable once read.
#[derive(Debug, Clone)]
pub struct Template {
    html: String,
}

impl Template {
    /// Read the template from disk.
    pub async fn load(path: &Path) -> Result<Self, TemplateError> {
        let html = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TemplateError::NotFound {
                path: path.to_path_buf(),
                source,
            })?;

        if !html.contains(GREETING_PLACEHOLDER) {
            tracing::warn!(
                path = %path.display(),
                "Template has no {{greeting}} placeholder; messages will not be personalized"
            );
        }
        Ok(Self { html })
    }

    pub fn from_string(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Substitute the salutation for every placeholder occurrence.
    pub fn render(&self, greeting: &str) -> String {
        self.html.replace(GREETING_PLACEHOLDER, greeting)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn render_replaces_placeholder() {
        let t = Template::from_string("<p>{greeting},</p><p>Bonjour</p>");
        assert_eq!(
            t.render("Cher Dupont, responsable de Acme"),
            "<p>Cher Dupont, responsable de Acme,</p><p>Bonjour</p>"
        );
    }

    #[test]
    fn render_without_placeholder_is_unchanged() {
        let t = Template::from_string("<p>Hello</p>");
        assert_eq!(t.render("Cher(e) responsable de Acme"), "<p>Hello</p>");
    }

    #[tokio::test]
    async fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<h1>{{greeting}}</h1>").unwrap();

        let t = Template::load(file.path()).await.unwrap();
        assert_eq!(t.render("Chère Dupont"), "<h1>Chère Dupont</h1>");
    }

    #[tokio::test]
    async fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.html");

        match Template::load(&path).await {
            Err(TemplateError::NotFound { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}

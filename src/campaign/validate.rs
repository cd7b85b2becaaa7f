//! Syntactic email address check.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.suffix`, word characters, dots and hyphens only, with a
/// mandatory word-character suffix after the last dot.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

/// Whether `email` has the shape of an address. No DNS or mailbox check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("a.b-c@d.com"));
        assert!(is_valid_email("info@iwalink.ch"));
        assert!(is_valid_email("first_last@sub.domain.co.uk"));
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("jérôme@exemple.fr"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert!(!is_valid_email("first+tag@example.com"));
        assert!(!is_valid_email("with space@example.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn rejects_trailing_dot() {
        assert!(!is_valid_email("a@b.com."));
    }

    #[test]
    fn rejects_trailing_newline() {
        assert!(!is_valid_email("a@b.com\n"));
    }
}

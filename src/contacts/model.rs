//! Contact record types.

use serde::Deserialize;

/// Literal `Envoyé` value marking a row as still to be emailed.
///
/// Matching is exact: any other value, including typos and empty cells,
/// means the row was already sent.
pub const NOT_YET_SENT: &str = "Faux";

/// One row of the contact sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactRecord {
    /// Raw "already sent" flag (`Vrai` / `Faux`).
    #[serde(rename = "Envoyé")]
    pub sent_flag: String,
    /// Recipient address, unvalidated.
    pub email: String,
    /// Name of the person in charge, if known.
    #[serde(rename = "nom du responsable")]
    pub responsible_name: Option<String>,
    /// Raw gender cell: `F`, `M`, `NA` or empty.
    #[serde(rename = "Sexe du Responsable")]
    pub responsible_gender: Option<String>,
    /// Company the message is addressed to.
    #[serde(rename = "nom de l'entreprise")]
    pub company_name: String,
}

impl ContactRecord {
    /// Whether this row still has to be emailed.
    pub fn is_eligible(&self) -> bool {
        self.sent_flag == NOT_YET_SENT
    }

    /// Parsed gender of the person in charge.
    pub fn gender(&self) -> Gender {
        Gender::parse(self.responsible_gender.as_deref())
    }
}

/// Gender of the person in charge, used to pick the salutation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    /// Absent, empty, the `NA` sentinel, or any unrecognized value.
    Unspecified,
}

impl Gender {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("F") => Self::Female,
            Some("M") => Self::Male,
            _ => Self::Unspecified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flag: &str) -> ContactRecord {
        ContactRecord {
            sent_flag: flag.into(),
            email: "a@b.com".into(),
            responsible_name: None,
            responsible_gender: None,
            company_name: "Acme".into(),
        }
    }

    #[test]
    fn only_exact_faux_is_eligible() {
        assert!(record("Faux").is_eligible());
        assert!(!record("Vrai").is_eligible());
        assert!(!record("faux").is_eligible());
        assert!(!record("Faux ").is_eligible());
        assert!(!record("").is_eligible());
    }

    #[test]
    fn gender_parsing() {
        assert_eq!(Gender::parse(Some("F")), Gender::Female);
        assert_eq!(Gender::parse(Some("M")), Gender::Male);
        assert_eq!(Gender::parse(Some("NA")), Gender::Unspecified);
        assert_eq!(Gender::parse(Some("X")), Gender::Unspecified);
        assert_eq!(Gender::parse(Some("")), Gender::Unspecified);
        assert_eq!(Gender::parse(None), Gender::Unspecified);
    }
}

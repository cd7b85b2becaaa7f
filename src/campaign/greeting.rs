//! Salutation line for each recipient.

use crate::contacts::Gender;

/// Build the French salutation that opens the message.
///
/// A named, gendered form is used only when the name is non-empty and the
/// gender is `F` or `M`; every other combination falls back to the neutral
/// form naming just the company.
pub fn compose_greeting(name: Option<&str>, gender: Gender, company: &str) -> String {
    match (name.filter(|n| !n.is_empty()), gender) {
        (Some(name), Gender::Female) => format!("Chère {name}, responsable de {company}"),
        (Some(name), Gender::Male) => format!("Cher {name}, responsable de {company}"),
        _ => format!("Cher(e) responsable de {company}"),
    }
}

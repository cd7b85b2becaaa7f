//! CSV decoding for uploaded contact sheets.

use crate::contacts::model::ContactRecord;
use crate::error::CsvError;

/// Header names the sheet must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Envoyé",
    "email",
    "nom du responsable",
    "Sexe du Responsable",
    "nom de l'entreprise",
];

/// Columns whose cells must be present on every row.
const MANDATORY_CELLS: &[&str] = &["Envoyé", "email", "nom de l'entreprise"];

/// Decode a UTF-8 CSV upload into contact records, in file order.
///
/// Empty cells in optional columns become `None`, and so do trailing
/// optional cells a row leaves out. A leading byte-order mark is skipped.
pub fn parse_contacts(bytes: &[u8]) -> Result<Vec<ContactRecord>, CsvError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(CsvError::MissingColumn((*missing).to_string()));
    }
    let mandatory: Vec<(&str, usize)> = MANDATORY_CELLS
        .iter()
        .filter_map(|col| Some((*col, headers.iter().position(|h| h == *col)?)))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let mut row = row?;
        let line = row.position().map_or(0, |p| p.line());

        if row.len() > headers.len() {
            return Err(CsvError::TooManyFields {
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }
        if let Some((column, _)) = mandatory.iter().find(|(_, idx)| *idx >= row.len()) {
            return Err(CsvError::MissingCell {
                line,
                column: (*column).to_string(),
            });
        }
        while row.len() < headers.len() {
            row.push_field("");
        }

        records.push(row.deserialize::<ContactRecord>(Some(&headers))?);
    }

    tracing::debug!(rows = records.len(), "Parsed contact sheet");
    Ok(records)
}

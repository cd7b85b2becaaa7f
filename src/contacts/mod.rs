//! Contact records parsed from the uploaded spreadsheet.

pub mod model;
pub mod sheet;

pub use model::{ContactRecord, Gender, NOT_YET_SENT};
pub use sheet::{REQUIRED_COLUMNS, parse_contacts};

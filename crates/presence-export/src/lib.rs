//! Export bridge for presence-tracker
//!
//! Builds the human-facing attendance sheet (one row per person, one column
//! per tracked day) and encodes it to XLSX, plus the machine-readable JSON
//! roster export that `import_roster` accepts back.

mod json;
mod table;
mod xlsx;

pub use json::*;
pub use table::*;
pub use xlsx::*;

use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Spreadsheet(e.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

//! Catalog loading error types.

use crate::domain::DomainError;

/// Errors that can occur when reading a flight catalog.
///
/// Line numbers are 1-based and count the header row.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the file failed
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not well-formed CSV
    #[error("malformed catalog: {0}")]
    Csv(#[source] csv::Error),

    /// The file has no header row
    #[error("catalog is empty: missing header row")]
    MissingHeader,

    /// A required column is absent from the header
    #[error("catalog header is missing column `{0}`")]
    MissingColumn(&'static str),

    /// A column appears twice in the header
    #[error("catalog header repeats column `{0}`")]
    DuplicateColumn(String),

    /// A row has a different number of fields than the header
    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field could not be parsed
    #[error("line {line}: invalid {field}: {message}")]
    InvalidField {
        line: usize,
        field: &'static str,
        message: String,
    },

    /// The fields parsed but don't describe a valid flight
    #[error("line {line}: {source}")]
    InvalidFlight {
        line: usize,
        #[source]
        source: DomainError,
    },
}

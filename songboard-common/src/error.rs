//! Common error types for Songboard

use thiserror::Error;

/// Errors raised while loading the dataset at startup.
///
/// Any of these is fatal: the process must not serve from a partially
/// valid dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A `year` cell could not be parsed as an integer
    #[error("Unparsable year {value:?} in row {row}")]
    UnparsableYear { row: usize, value: String },

    /// The table parsed but contains no rows
    #[error("Dataset contains no rows")]
    Empty,

    /// Fewer than two feature columns; axis defaults would be undefined
    #[error("Dataset needs at least two feature columns, found {0}")]
    TooFewFeatureColumns(usize),
}

/// Invalid filter-state input from the interaction layer.
///
/// The declared controls can only offer valid values, so hitting this is a
/// programmer error upstream; it is signaled rather than silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Axis selection outside the dataset's available columns
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

use thiserror::Error;

/// Errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not a 3 or 6 digit hexadecimal color (with or
    /// without a leading `#`).
    #[error("invalid hex color “{0}”")]
    InvalidFormat(String),
    /// A custom [`WeightTable`][crate::WeightTable] violates the table
    /// invariants.
    #[error("invalid weight table: {0}")]
    InvalidTable(&'static str),
}

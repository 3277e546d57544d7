//! Error types for Huffman code construction and metrics.

use thiserror::Error;

/// Error variants for table validation, tree construction and metrics.
///
/// Every variant is an invalid-input condition: a caller contract
/// violation, never transient, never worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A tree was requested for a table with no entries.
    #[error("empty probability table")]
    EmptyTable,

    /// Provided probability is invalid (e.g., zero, negative, above one or non-finite).
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),

    /// The same symbol appears twice in a table.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),

    /// A table symbol has no entry in the code table.
    #[error("no code for symbol: {0}")]
    MissingCode(String),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::EmptyTable.to_string(), "empty probability table");
        assert_eq!(
            Error::InvalidProbability(-0.5).to_string(),
            "invalid probability: -0.5"
        );
        assert_eq!(
            Error::MissingCode("'x'".into()).to_string(),
            "no code for symbol: 'x'"
        );
    }
}

//! Error types shared by every algorithm in the crate.

use thiserror::Error;

/// Result type for fallible algorithms.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the algorithms in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller passed an argument outside the algorithm's domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates an [`Error::InvalidInput`] from anything string-like.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("k = 0 is out of range [1, 3]");
        assert_eq!(err.to_string(), "Invalid input: k = 0 is out of range [1, 3]");
    }

    #[test]
    fn test_invalid_input_constructor_matches_variant() {
        assert_eq!(
            Error::invalid_input(String::from("empty")),
            Error::InvalidInput("empty".to_string())
        );
    }
}

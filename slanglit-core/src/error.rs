//! Error types for dictionary loading
//!
//! Transformation itself never fails; only building a [`SlangTable`] from
//! external data can.
//!
//! [`SlangTable`]: crate::dictionary::SlangTable

use thiserror::Error;

/// Errors raised while loading or validating a slang dictionary
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O error while reading a dictionary file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary document could not be parsed
    #[error("failed to parse {format} dictionary: {message}")]
    Parse {
        /// Source format ("toml" or "json")
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// A single entry violates the dictionary schema
    #[error("invalid entry '{slang}': {reason}")]
    InvalidEntry {
        /// The offending slang key (may be empty)
        slang: String,
        /// What is wrong with it
        reason: String,
    },

    /// Two entries share the same slang key
    #[error("duplicate slang entry '{0}'")]
    DuplicateEntry(String),

    /// File extension is not a known dictionary format
    #[error("unsupported dictionary format: {0}")]
    UnsupportedFormat(String),

    /// Dictionary contains no entries
    #[error("dictionary contains no entries")]
    EmptyDictionary,
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Parse {
            format: "toml",
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Parse {
            format: "json",
            message: err.to_string(),
        }
    }
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, CoreError>;

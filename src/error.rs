//! Error types for the textvec library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TextVecError`] enum. Construction-time failures (unknown category names,
//! unsupported casing modes, unknown stemmer languages, malformed locales) are
//! reported as [`TextVecError::InvalidArgument`] or
//! [`TextVecError::UnsupportedLanguage`]; per-document decoding failures as
//! [`TextVecError::InvalidEncoding`].
//!
//! # Examples
//!
//! ```
//! use textvec::error::{Result, TextVecError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextVecError::invalid_argument("unknown general category 'Xx'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textvec operations.
#[derive(Error, Debug)]
pub enum TextVecError {
    /// A configuration value was rejected (category name, casing mode, locale, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested stemming language is not available.
    #[error("Unsupported stemming language: '{0}'")]
    UnsupportedLanguage(String),

    /// Input bytes were not valid UTF-8.
    #[error("Invalid encoding{}: malformed UTF-8 at byte offset {offset}", document_suffix(.document))]
    InvalidEncoding {
        /// Index of the offending document within its batch, when known.
        document: Option<usize>,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },

    /// A vectorizer handle pointed past the end of the registry.
    #[error("Handle index {index} out of range (registry holds {len} slots)")]
    IndexOutOfRange {
        /// The handle index that was requested.
        index: usize,
        /// Number of slots in the registry.
        len: usize,
    },

    /// A vectorizer handle referred to a released slot.
    #[error("Null vectorizer handle: slot {0} has been released")]
    NullHandle(usize),

    /// I/O errors (reading config or input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

fn document_suffix(document: &Option<usize>) -> String {
    match document {
        Some(index) => format!(" in document {index}"),
        None => String::new(),
    }
}

/// Result type alias for operations that may fail with TextVecError.
pub type Result<T> = std::result::Result<T, TextVecError>;

impl TextVecError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextVecError::InvalidArgument(msg.into())
    }

    /// Create a new unsupported language error.
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        TextVecError::UnsupportedLanguage(language.into())
    }

    /// Create a new invalid encoding error for a standalone buffer.
    pub fn invalid_encoding(offset: usize) -> Self {
        TextVecError::InvalidEncoding {
            document: None,
            offset,
        }
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        TextVecError::ThreadPool(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextVecError::Other(msg.into())
    }

    /// Attach a batch document index to an encoding error.
    ///
    /// Other variants are returned unchanged.
    pub fn in_document(self, index: usize) -> Self {
        match self {
            TextVecError::InvalidEncoding { offset, .. } => TextVecError::InvalidEncoding {
                document: Some(index),
                offset,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextVecError::invalid_argument("unknown general category 'Xx'");
        assert_eq!(
            error.to_string(),
            "Invalid argument: unknown general category 'Xx'"
        );

        let error = TextVecError::unsupported_language("klingon");
        assert_eq!(
            error.to_string(),
            "Unsupported stemming language: 'klingon'"
        );
    }

    #[test]
    fn test_encoding_error_messages() {
        let error = TextVecError::invalid_encoding(7);
        assert_eq!(
            error.to_string(),
            "Invalid encoding: malformed UTF-8 at byte offset 7"
        );

        let error = error.in_document(3);
        assert_eq!(
            error.to_string(),
            "Invalid encoding in document 3: malformed UTF-8 at byte offset 7"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let textvec_error = TextVecError::from(io_error);

        match textvec_error {
            TextVecError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}

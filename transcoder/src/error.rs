//! Error types for the transcoder.
//!
//! This module defines one error type per concern:
//!
//! - [`ReadError`] - input missing, unreadable, or undecodable
//! - [`ParseError`] - document structurally invalid
//! - [`WriteError`] - output path unwritable or encoding failure
//! - [`VocabularyError`] - vocabulary configuration invalid
//! - [`ConvertError`] - top-level conversion errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. All errors are fatal
//! to the single conversion call they occur in; the library performs
//! no logging and no retries of its own.

use thiserror::Error;

// =============================================================================
// Read Errors
// =============================================================================

/// Errors while reading tabular input.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to open or read the input file.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 text")]
    Encoding,

    /// Malformed tabular data.
    #[error("invalid tabular data: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors while decoding a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Document is not valid JSON.
    #[error("document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document root must be an array of records.
    #[error("document root is not an array of records")]
    NotAnArray,

    /// A record entry was not an object.
    #[error("record {index} is not an object")]
    NotAnObject { index: usize },
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while writing conversion output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write the output file.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode tabular output.
    #[error("failed to encode tabular output: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to encode the document.
    #[error("failed to encode document: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Vocabulary Errors
// =============================================================================

/// Vocabulary configuration errors.
///
/// Returned by the consistency check and by custom vocabulary file
/// loading. A vocabulary that fails these checks would silently drop
/// or collide fields during conversion, so it is rejected up front.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// An ingest target has no corresponding egress entry.
    #[error("ingest target '{0}' has no egress mapping")]
    UnmappedIngestTarget(String),

    /// A table declares the same key twice.
    #[error("duplicate key '{key}' in {table} table")]
    DuplicateKey { table: &'static str, key: String },

    /// Failed to read a vocabulary file.
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    /// Vocabulary file is not valid JSON.
    #[error("invalid vocabulary file: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the main error type returned by the file-level conversion
/// entry points. It wraps all lower-level errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input could not be read.
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Document could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Output could not be written.
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// Vocabulary configuration is invalid.
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ReadError -> ConvertError
        let read_err = ReadError::Encoding;
        let convert_err: ConvertError = read_err.into();
        assert!(convert_err.to_string().contains("UTF-8"));

        // ParseError -> ConvertError
        let parse_err = ParseError::NotAnObject { index: 3 };
        let convert_err: ConvertError = parse_err.into();
        assert!(convert_err.to_string().contains("record 3"));
    }

    #[test]
    fn test_vocabulary_error_format() {
        let err = VocabularyError::UnmappedIngestTarget("companyName".into());
        assert!(err.to_string().contains("companyName"));

        let err = VocabularyError::DuplicateKey {
            table: "egress",
            key: "phone".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("egress"));
        assert!(msg.contains("phone"));
    }
}

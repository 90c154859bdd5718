//! Error types for rets-compact
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Failing to locate the `RETS` envelope element is deliberately *not* a
//! dedicated variant: the scanner surfaces whatever the underlying stream
//! reported (`Xml` or `Io`), including end-of-input. Compatibility tests
//! depend on that asymmetry.

use thiserror::Error;

/// The main error type for rets-compact
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Envelope & Wire Format Errors
    // ============================================================================
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid reply code {value:?}")]
    ReplyCodeFormat { value: String },

    #[error("Invalid delimiter {value:?}: expected 1-2 hex digits")]
    DelimiterFormat { value: String },

    #[error("Invalid record count {value:?}")]
    CountFormat { value: String },

    // ============================================================================
    // Compact Data Errors
    // ============================================================================
    #[error("Row {row} has {actual} fields, header has {expected}")]
    RowShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    #[error("Row index {row} out of range (0..{rows})")]
    RowIndexOutOfRange { row: usize, rows: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a reply code format error
    pub fn reply_code(value: impl Into<String>) -> Self {
        Self::ReplyCodeFormat {
            value: value.into(),
        }
    }

    /// Create a delimiter format error
    pub fn delimiter(value: impl Into<String>) -> Self {
        Self::DelimiterFormat {
            value: value.into(),
        }
    }

    /// Create an unknown column error
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    /// True when the error came from the underlying stream rather than the
    /// decoded content (the envelope scanner's not-found path reports these)
    pub fn is_stream(&self) -> bool {
        matches!(self, Error::Xml(_) | Error::Io(_))
    }
}

/// Result type alias for rets-compact
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::delimiter("zz");
        assert_eq!(
            err.to_string(),
            "Invalid delimiter \"zz\": expected 1-2 hex digits"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::RowShapeMismatch {
            row: 2,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Row 2 has 3 fields, header has 4");
    }

    #[test]
    fn test_is_stream() {
        assert!(Error::Io(std::io::ErrorKind::UnexpectedEof.into()).is_stream());
        assert!(!Error::reply_code("x").is_stream());
        assert!(!Error::unknown_column("Status").is_stream());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}

//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// `Planning Center` API error with status context
    #[error("Planning Center API error: {message}")]
    PlanningCenter {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Response or date parsing error
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// HTML-to-image renderer error
    #[error("Renderer error: {0}")]
    Renderer(String),
}

impl Error {
    /// Create a `Planning Center` error with HTTP status
    pub fn pco_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check PC_ID and PC_SECRET environment variables"),
            403 => Some("Your API credentials may lack required permissions"),
            404 => Some("The requested resource was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Planning Center server error - try again later"),
            _ => None,
        };
        Self::PlanningCenter {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    /// Create a renderer error
    pub fn renderer(message: impl Into<String>) -> Self {
        Self::Renderer(message.into())
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn pco_status_provides_hints() {
        let err = Error::pco_status("Unauthorized", 401);
        match err {
            Error::PlanningCenter { hint: Some(h), .. } => {
                assert!(h.contains("PC_ID"));
            }
            _ => panic!("Expected PlanningCenter error with hint"),
        }
    }

    #[test]
    fn server_errors_suggest_retrying_later() {
        let err = Error::pco_status("Bad gateway", 502);
        match err {
            Error::PlanningCenter { status: Some(502), hint: Some(h), .. } => {
                assert!(h.contains("try again later"));
            }
            _ => panic!("Expected PlanningCenter error with server hint"),
        }
    }
}

//! Error types for recordseek.
//!
//! [`SearchError`] covers the two failure families of a search round trip
//! (transport and response format) plus the ambient failures of the plugin
//! itself (configuration, theme loading, I/O). All variants are built with
//! `thiserror`.

use thiserror::Error;

/// The main error type for recordseek operations.
///
/// Search failures never abort the plugin: the session state machine turns
/// them into an `Error` status and keeps the previous result set browsable.
/// [`SearchError::display_message`] gives the text shown to the user.
///
/// # Examples
///
/// ```
/// use recordseek::SearchError;
///
/// let err = SearchError::Transport { status: Some(400), message: "invalid date".into() };
/// assert_eq!(err.display_message(), "invalid date");
/// ```
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be delivered, or the service answered with a
    /// non-success status.
    ///
    /// `message` is the server-supplied error text when one was present,
    /// otherwise the status description reported by the transport.
    #[error("Transport error: {message}")]
    Transport {
        /// HTTP status code, if the transport produced one.
        status: Option<u16>,
        /// Human-readable description of the failure.
        message: String,
    },

    /// The response body could not be read as a list of records.
    #[error("Response format error: {0}")]
    ResponseFormat(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Returns the message shown in the error line of the UI.
    ///
    /// Transport errors show the bare server or status text so that a
    /// service answering `{"error": "invalid date"}` is displayed as
    /// `invalid date`. Other variants use their full `Display` form.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Transport { message, .. } => message.clone(),
            Self::ResponseFormat(detail) => format!("malformed response: {detail}"),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for recordseek operations.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_shown_verbatim() {
        let err = SearchError::Transport {
            status: Some(400),
            message: "invalid date".to_string(),
        };
        assert_eq!(err.display_message(), "invalid date");
        assert_eq!(err.to_string(), "Transport error: invalid date");
    }

    #[test]
    fn format_errors_are_prefixed() {
        let err = SearchError::ResponseFormat("expected a JSON array".to_string());
        assert_eq!(err.display_message(), "malformed response: expected a JSON array");
    }
}

//! Error types for pagekit
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every request-level failure — network errors, HTTP error statuses,
//! malformed collection bodies — is normalized into `Error::Remote`, which
//! carries the decoded body of whichever call failed. Callers never see raw
//! transport-level failures.

use serde_json::Value;
use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    /// A remote request failed. The payload is the decoded body of the
    /// failing response (or a string describing the transport failure).
    #[error("remote request failed: {body}")]
    Remote {
        /// Decoded body of the failing response
        body: Value,
    },

    /// Transport configuration error (invalid base URL, bad header value).
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },
}

impl Error {
    /// Create a normalized remote-failure error from a response body
    pub fn remote(body: impl Into<Value>) -> Self {
        Self::Remote { body: body.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The decoded body of the failing request, if this is a remote failure
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Remote { body } => Some(body),
            Self::Config { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Remote {
            body: Value::String(err.to_string()),
        }
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

//! Fetch error types
//!
//! Two kinds of failure can end a request. Both are shown to the user the
//! same way, as a message prefixed with `"Error: "`.

use thiserror::Error;

/// Detail used when a non-success response carries no body
pub const HTTP_FALLBACK_DETAIL: &str = "Request failed";

/// Detail used when a transport failure has no description
pub const TRANSPORT_FALLBACK_DETAIL: &str = "Something went wrong";

/// Why an idea could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// The request could not complete (connect, send, or body read failed)
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Build an HTTP error from a status code and the response body
    pub fn http(status: u16, body: String) -> Self {
        let detail = if body.is_empty() {
            HTTP_FALLBACK_DETAIL.to_string()
        } else {
            body
        };
        Self::Http { status, detail }
    }

    /// Build a transport error from an underlying failure description
    pub fn transport(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            Self::Transport(TRANSPORT_FALLBACK_DETAIL.to_string())
        } else {
            Self::Transport(description)
        }
    }

    /// Message displayed in the Error view
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::transport(e.to_string())
    }
}

//! Errors raised while retrieving a page of characters.
//!
//! Every variant is recoverable: the caller keeps its last good page and
//! the user may trigger another load.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Page numbers start at 1
    #[error("Invalid page {page}: pages start at 1")]
    InvalidPage { page: u32 },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Connection or transport failure
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API answered with a non-success status
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// No response within the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Response body was not JSON
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short message for the footer.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidPage { .. } => "Invalid page".to_string(),
            FetchError::Client { .. } | FetchError::Network { .. } => {
                "Could not reach the API".to_string()
            }
            FetchError::Status { status, message } => format!("{message} ({status})"),
            FetchError::Timeout { duration } => format!("No response after {duration}s"),
            FetchError::Decode(_) => "Unreadable response from the API".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code() {
        let err = FetchError::Status {
            status: 404,
            message: "There is nothing here".to_string(),
        };
        assert_eq!(err.user_message(), "There is nothing here (404)");
        assert_eq!(err.to_string(), "API returned 404: There is nothing here");
    }

    #[test]
    fn timeout_message() {
        let err = FetchError::Timeout { duration: 10 };
        assert_eq!(err.to_string(), "Request timeout after 10s");
        assert_eq!(err.user_message(), "No response after 10s");
    }
}

//! Typed errors for API calls.
//!
//! The CLI needs to tell a rejected token apart from a transport failure or a login that
//! should be retried, so API calls return [`ApiError`]. Everything else in the crate uses
//! `anyhow::Result`.

use thiserror::Error;

pub const UNEXPECTED_STRUCTURE: &str =
    "Token may be incorrect or expired, received unexpected response structure.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error making the request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error decoding response: {0}\n{msg}", msg = UNEXPECTED_STRUCTURE)]
    UnexpectedResponse(#[source] serde_json::Error),

    #[error("{}", rejected_text(.message))]
    Rejected { message: Option<String> },

    #[error("Login failed: {0}")]
    LoginRejected(String),

    #[error("Login response did not contain a token")]
    MissingToken,

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

fn rejected_text(message: &Option<String>) -> String {
    match message {
        Some(message) => format!("Token may be incorrect or expired: {}", message),
        None => UNEXPECTED_STRUCTURE.to_string(),
    }
}

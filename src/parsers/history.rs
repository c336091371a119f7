use serde_json::Value;

use crate::error::ApiError;
use crate::models::{ChatMessage, HistoryResponse};

/// Decode a `getChatsHistory` body into its message list
///
/// The body is decoded independently of the HTTP status: the server reports expired tokens
/// with `success: false` and an optional `message`, sometimes on a 2xx response.
///
/// # Errors
///
/// - [`ApiError::UnexpectedResponse`] if the body is not a `{success, data}` envelope
/// - [`ApiError::Rejected`] if `success` is false, carrying the server's `message` when
///   the body has one
pub fn decode_history(body: &str) -> Result<Vec<ChatMessage>, ApiError> {
    let response: HistoryResponse =
        serde_json::from_str(body).map_err(ApiError::UnexpectedResponse)?;

    if !response.success {
        return Err(ApiError::Rejected { message: rejection_message(body) });
    }

    Ok(response.data)
}

fn rejection_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

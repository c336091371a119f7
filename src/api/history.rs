use reqwest::blocking::Client;

use super::headers::history_headers;
use crate::error::ApiError;
use crate::models::{ChatMessage, Session};
use crate::parsers::decode_history;

pub fn history_url(api_base: &str, correspondent_id: i64) -> String {
    format!("{}/message/getChatsHistory/{}", api_base.trim_end_matches('/'), correspondent_id)
}

/// Fetch the full chat history with one correspondent, in server order
///
/// The body is decoded whatever the status code; see [`decode_history`].
pub fn fetch_history(
    client: &Client,
    session: &Session,
    correspondent_id: i64,
) -> Result<Vec<ChatMessage>, ApiError> {
    let url = history_url(&session.api_base, correspondent_id);
    tracing::debug!(%url, "requesting chat history");

    let response = client.get(&url).headers(history_headers(session)?).send()?;
    let status = response.status();
    let body = response.text()?;
    tracing::debug!(%status, bytes = body.len(), "received chat history");

    let messages = decode_history(&body)?;
    tracing::info!(count = messages.len(), "decoded chat history");
    Ok(messages)
}

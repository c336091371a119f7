use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "path")]
    pub remote_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    #[serde(rename = "send_by")]
    pub sender_id: i64,
    #[serde(
        rename = "message",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_nullable_text"
    )]
    pub text: String,
    #[serde(
        rename = "send_at",
        deserialize_with = "crate::parsers::deserializers::deserialize_epoch_seconds"
    )]
    pub sent_at: i64,
    #[serde(rename = "upload", default)]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_nullable_list")]
    pub data: Vec<ChatMessage>,
}

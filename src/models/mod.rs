//! Data models for the fan-club messaging API.
//!
//! - [`ChatMessage`] / [`Attachment`] - one entry of a chat history
//! - [`HistoryResponse`] - the JSON envelope returned by `getChatsHistory`
//! - [`Tenant`] / [`Correspondent`] - catalog entries used to pick an API deployment
//! - [`Session`] - resolved credentials and app identity for one run
//!
//! Wire-format quirks (nullable text, string timestamps) are handled by the custom
//! deserializers in `parsers::deserializers`.

pub mod catalog;
pub mod message;
pub mod session;

pub use catalog::{Correspondent, Tenant};
pub use message::{Attachment, ChatMessage, HistoryResponse};
pub use session::Session;

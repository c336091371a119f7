//! JSON decoders for API responses
//!
//! Unlike a line-oriented log, a history response is a single envelope: one malformed entry
//! means the server sent something this client does not understand, so decoding fails as a
//! whole rather than skipping entries.

pub mod deserializers;
pub mod history;

pub use history::decode_history;

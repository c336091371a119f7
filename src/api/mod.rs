//! Blocking HTTP plumbing for the messaging API
//!
//! One [`reqwest::blocking::Client`] is built per run (optionally behind a forward proxy)
//! and shared read-only by the login call, the history fetch, and attachment downloads.

pub mod client;
pub mod headers;
pub mod history;
pub mod login;

pub use client::{ClientOptions, build_client};
pub use history::fetch_history;
pub use login::{Credentials, login};

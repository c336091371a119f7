//! B4ND Archiver - save a fan-club chat history to local files
//!
//! The pipeline is linear:
//!
//! 1. **Session** ([`session`]): a bearer token from direct entry or an email/password login
//! 2. **Fetch** ([`api::fetch_history`]): one authenticated `GET` of the whole history,
//!    decoded by [`parsers::decode_history`]
//! 3. **Archive** ([`archive::Archiver`]): per-sender text files and attachments, with file
//!    modification times set to the message send time and existing files left alone
//!
//! # Example
//!
//! ```no_run
//! use b4nd_archiver::api::{ClientOptions, build_client, fetch_history};
//! use b4nd_archiver::archive::{Archiver, HttpDownloader};
//! use b4nd_archiver::config::AppConfig;
//! use b4nd_archiver::models::Session;
//!
//! let config = AppConfig::default();
//! let tenant = config.tenant("b4nd").unwrap();
//! let client = build_client(&ClientOptions::default())?;
//! let session = Session::new("12345|secret".to_string(), tenant);
//!
//! let messages = fetch_history(&client, &session, 37)?;
//! let archiver = Archiver::new("archive", &session.api_base, HttpDownloader::new(&client));
//! let summary = archiver.archive(&messages, &mut std::io::stdout())?;
//! println!("{}", summary);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use archive::{ArchiveSummary, Archiver};
pub use error::ApiError;
pub use models::{ChatMessage, Session};
pub use parsers::decode_history;

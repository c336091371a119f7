//! Idempotent archiving of a chat history to disk
//!
//! Layout under the archive root:
//!
//! ```text
//! <root>/<senderId>/<senderId>_<sentAt>.txt   one file per text message
//! <root>/<senderId>/<attachment basename>     one file per attachment
//! ```
//!
//! Every file's modification time is the message's send time. Existing files are never
//! touched, so re-running after an interruption only fills the gaps. Attachments are
//! streamed to `<name>.part` and renamed into place once complete, so an interrupted
//! download is retried rather than mistaken for a finished one.

pub mod download;
pub mod writer;

pub use download::{Downloader, HttpDownloader};
pub use writer::{ArchiveSummary, Archiver, normalize_line_breaks};

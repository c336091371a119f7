use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::download::Downloader;
use crate::models::{Attachment, ChatMessage};
use crate::utils::{
    attachment_basename, epoch_to_system_time, format_local, resolve_attachment_url,
    sanitize_for_terminal, sender_dir, text_file_name,
};

const PART_SUFFIX: &str = ".part";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub texts_written: usize,
    pub files_downloaded: usize,
    pub skipped: usize,
}

impl ArchiveSummary {
    pub fn writes(&self) -> usize {
        self.texts_written + self.files_downloaded
    }
}

impl fmt::Display for ArchiveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} messages written, {} files downloaded, {} skipped",
            self.texts_written, self.files_downloaded, self.skipped
        )
    }
}

/// Replaces the literal two-character sequence `\r\n` (backslash, r, backslash, n) the
/// API embeds in message text with a real newline
///
/// # Examples
///
/// ```
/// use b4nd_archiver::archive::normalize_line_breaks;
///
/// assert_eq!(normalize_line_breaks(r"line1\r\nline2"), "line1\nline2");
/// ```
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace("\\r\\n", "\n")
}

/// Writes messages and attachments under `root`, one directory per sender
pub struct Archiver<D: Downloader> {
    root: PathBuf,
    api_base: String,
    downloader: D,
}

impl<D: Downloader> Archiver<D> {
    /// `api_base` is used to resolve attachment paths that are not full URLs
    pub fn new(root: impl Into<PathBuf>, api_base: impl Into<String>, downloader: D) -> Self {
        Self { root: root.into(), api_base: api_base.into(), downloader }
    }

    /// Archive `messages` in order, printing one progress line per written item to `out`
    ///
    /// # Errors
    ///
    /// Any filesystem or download error stops the run at the failing item. Items written
    /// before it stay on disk and are skipped by the next run.
    pub fn archive<W: Write>(&self, messages: &[ChatMessage], out: &mut W) -> Result<ArchiveSummary> {
        let mut summary = ArchiveSummary::default();

        for message in messages {
            let dir = sender_dir(&self.root, message.sender_id);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

            if !message.text.is_empty() {
                if self.write_text(&dir, message)? {
                    summary.texts_written += 1;
                    let text = sanitize_for_terminal(&normalize_line_breaks(&message.text));
                    writeln!(out, "[{}]: {}", format_local(message.sent_at), text)?;
                } else {
                    summary.skipped += 1;
                }
            }

            if let Some(attachment) = &message.attachment {
                match self.download_attachment(&dir, message, attachment)? {
                    Some(name) => {
                        summary.files_downloaded += 1;
                        writeln!(
                            out,
                            "[{}]: Downloaded file {}",
                            format_local(message.sent_at),
                            sanitize_for_terminal(&name)
                        )?;
                    }
                    None => summary.skipped += 1,
                }
            }
        }

        Ok(summary)
    }

    /// Returns `false` when the file already exists
    fn write_text(&self, dir: &Path, message: &ChatMessage) -> Result<bool> {
        let path = dir.join(text_file_name(message.sender_id, message.sent_at));

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create {}", path.display()));
            }
        };

        let written = file
            .write_all(normalize_line_breaks(&message.text).as_bytes())
            .and_then(|()| file.set_modified(epoch_to_system_time(message.sent_at)));

        if let Err(e) = written {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(e).with_context(|| format!("Failed to write {}", path.display()));
        }

        Ok(true)
    }

    /// Returns the local file name when something was downloaded
    fn download_attachment(
        &self,
        dir: &Path,
        message: &ChatMessage,
        attachment: &Attachment,
    ) -> Result<Option<String>> {
        if attachment.remote_path.trim().is_empty() {
            tracing::warn!(message_id = message.id, "attachment has an empty path, skipping");
            return Ok(None);
        }

        let (url, name) = match resolve_attachment_url(&self.api_base, &attachment.remote_path)
            .and_then(|url| attachment_basename(&url).map(|name| (url, name)))
        {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(message_id = message.id, "skipping attachment: {:#}", e);
                return Ok(None);
            }
        };

        // Basename collisions across messages are not disambiguated: the first file wins
        let path = dir.join(&name);
        if path.exists() {
            tracing::debug!(message_id = message.id, file = %name, "attachment already archived");
            return Ok(None);
        }

        let part = dir.join(format!("{}{}", name, PART_SUFFIX));
        let result = self.download_to(&url, &part, message.sent_at).and_then(|()| {
            fs::rename(&part, &path)
                .with_context(|| format!("Failed to move download into place: {}", path.display()))
        });

        if let Err(e) = result {
            let _ = fs::remove_file(&part);
            return Err(e);
        }

        Ok(Some(name))
    }

    fn download_to(&self, url: &reqwest::Url, part: &Path, sent_at: i64) -> Result<()> {
        let mut file = File::create(part)
            .with_context(|| format!("Failed to create {}", part.display()))?;

        let bytes = self.downloader.download(url, &mut file)?;
        file.set_modified(epoch_to_system_time(sent_at))
            .with_context(|| format!("Failed to set modification time on {}", part.display()))?;
        tracing::debug!(bytes, file = %part.display(), "download complete");

        Ok(())
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use percent_encoding::percent_decode_str;
use reqwest::Url;

/// Directory holding everything archived for one sender
pub fn sender_dir(root: &Path, sender_id: i64) -> PathBuf {
    root.join(sender_id.to_string())
}

/// File name for a text message: `<senderId>_<sentAt>.txt`
pub fn text_file_name(sender_id: i64, sent_at: i64) -> String {
    format!("{}_{}.txt", sender_id, sent_at)
}

/// Resolves an attachment path to an absolute URL
///
/// Absolute URLs are used as-is. Server paths (`/storage/x.jpg`, `storage/x.jpg`) resolve
/// against the origin of `api_base`, not against the API prefix.
///
/// # Examples
///
/// ```
/// use b4nd_archiver::utils::paths::resolve_attachment_url;
///
/// let url = resolve_attachment_url("https://admin.b4nd.me/api", "/storage/a.jpg")?;
/// assert_eq!(url.as_str(), "https://admin.b4nd.me/storage/a.jpg");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn resolve_attachment_url(api_base: &str, remote_path: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(remote_path) {
        return Ok(url);
    }

    let base = Url::parse(api_base)
        .with_context(|| format!("Invalid API base URL: {}", api_base))?;
    let relative = format!("/{}", remote_path.trim_start_matches('/'));
    base.join(&relative)
        .with_context(|| format!("Invalid attachment path: {}", remote_path))
}

/// Local file name for an attachment: the last path segment exactly as it appears in the URL
///
/// Percent escapes are kept, so `my%20photo.jpg` is saved under that name and archives
/// written by earlier runs are still recognised. The query string and fragment never
/// become part of the name.
///
/// # Errors
///
/// Returns an error if the name is empty, `.` or `..`, or contains a path separator,
/// either as written or once percent-decoded.
pub fn attachment_basename(url: &Url) -> Result<String> {
    let segment = url.path_segments().and_then(|mut segments| segments.next_back()).unwrap_or("");

    validate_basename(segment)?;
    validate_basename(&percent_decode_str(segment).decode_utf8_lossy())?;
    Ok(segment.to_string())
}

fn validate_basename(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        bail!("Attachment has no usable file name: {:?}", name);
    }
    if name.contains('/') || name.contains('\\') {
        bail!("Attachment file name contains a path separator: {:?}", name);
    }
    Ok(())
}

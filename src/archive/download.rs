use std::io::Write;

use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::blocking::Client;

/// Fetches attachment bodies
pub trait Downloader {
    /// Streams the body at `url` into `dest`, returning the number of bytes written
    fn download(&self, url: &Url, dest: &mut dyn Write) -> Result<u64>;
}

/// Unauthenticated GET through the shared client
pub struct HttpDownloader<'a> {
    client: &'a Client,
}

impl<'a> HttpDownloader<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

impl Downloader for HttpDownloader<'_> {
    fn download(&self, url: &Url, dest: &mut dyn Write) -> Result<u64> {
        tracing::debug!(%url, "downloading attachment");
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to download {}", url))?;

        response.copy_to(dest).with_context(|| format!("Failed to read body of {}", url))
    }
}

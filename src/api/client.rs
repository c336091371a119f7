use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;

#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Forward proxy as `host:port`
    pub proxy: Option<String>,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

/// Proxy URL for a `host:port` address
pub fn proxy_url(addr: &str) -> Result<String> {
    let addr = addr.trim();
    if addr.is_empty() || addr.contains("://") || addr.contains('/') {
        bail!("Proxy address must be in the format host:port, got '{}'", addr);
    }
    let url = format!("http://{}", addr);
    reqwest::Url::parse(&url).with_context(|| format!("Error parsing proxy address: {}", addr))?;
    Ok(url)
}

pub fn build_client(options: &ClientOptions) -> Result<Client> {
    let mut builder = Client::builder().timeout(options.timeout);

    if let Some(addr) = &options.proxy {
        let url = proxy_url(addr)?;
        let proxy = reqwest::Proxy::all(&url)
            .with_context(|| format!("Error parsing proxy address: {}", addr))?;
        builder = builder.proxy(proxy);
    }

    builder.build().context("Failed to build HTTP client")
}

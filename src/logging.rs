//! Diagnostic logging to stderr via `tracing`
//!
//! Prompts and progress lines are regular stdout output; logs are for diagnosing a run.
//! `RUST_LOG` overrides the level chosen with `-v`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn, then info/debug/trace for this crate only
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,b4nd_archiver={}", level)
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Install the global `fmt` subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parse a `RUST_LOG`-style directive string, falling back to
/// `DEFAULT_FILTER` when unset, blank or invalid.
fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|r| !r.is_empty())
        .and_then(|r| EnvFilter::try_new(r).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;

//! Log Filter Selection
//!
//! `RUST_LOG` takes precedence over the configured level when it holds a
//! valid filter; otherwise the configured level applies to everything.

use tracing_subscriber::EnvFilter;

/// Build the tracing filter from the configured level and an optional
/// `RUST_LOG` value.
pub fn env_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| match EnvFilter::try_new(directives) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("ignoring invalid {}: {}", EnvFilter::DEFAULT_ENV, e);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(level))
}

//! # Observability
//!
//! Structured logging through `tracing`. The filter defaults to `info` and
//! follows `RUST_LOG` when it is set.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}

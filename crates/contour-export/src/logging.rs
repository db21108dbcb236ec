//! Logging setup for the command line tool.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,contour_lib=debug,contour_export=debug"
    } else {
        "info"
    }
}

/// Initialize the fmt subscriber, honouring `RUST_LOG` when present.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

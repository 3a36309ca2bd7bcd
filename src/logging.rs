use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber shared by every shopview binary.
///
/// `default_filter` applies when `RUST_LOG` is unset, so all entry points
/// agree on formatting while staying overridable per invocation.
pub fn init_tracing(default_filter: &str) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}

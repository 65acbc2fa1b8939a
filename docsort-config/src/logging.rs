use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Filter used when `RUST_LOG` is unset. Library noise stays at warn.
pub const DEFAULT_LOG_FILTER: &str = "warn,docsort=info,docsort_core=info,docsort_config=info";

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG` and falls back to `default_filter`. Logs go to stderr so
/// command output on stdout stays machine readable.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

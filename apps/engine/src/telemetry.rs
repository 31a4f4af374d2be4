use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// `RUST_LOG` when set, otherwise `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// One JSON object per event, no ANSI, no source locations.
pub fn json_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry().with(filter).with(fmt_layer)
}

/// Install the process-wide JSON subscriber.
pub fn init_tracing(default_filter: &str) {
    json_subscriber(env_filter(default_filter)).init();
}

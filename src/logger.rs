pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time;

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Log to stderr; stdout carries the inline-image escape sequences
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_timer(time::uptime())
        .with_writer(std::io::stderr)
        .init();
}

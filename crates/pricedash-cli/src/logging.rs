use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PRICEDASH_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Logs go to stderr so stdout only ever carries the rendered output.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Console logging setup using `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Initialise stderr logging for the one-shot CLI.
///
/// Emits human-readable output to stderr only, controlled by `RUST_LOG`
/// (default: `info`). Report text goes to stdout and is never logged, so
/// piping the report stays clean.
pub fn init_cli() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

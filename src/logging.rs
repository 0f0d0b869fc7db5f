//! Logging init: stderr subscriber honoring `RUST_LOG`, defaulting to info.
//! Diagnostics stay on stderr so the interactive prompt on stdout is clean.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

//! Logging setup for the `reqsort` binary.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG`, when set, wins over `-v`.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("reqsort started with verbosity level: {}", verbose);
}

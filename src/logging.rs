// src/logging.rs
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `-v`.
///
/// The engine logs through the `log` facade; tracing-subscriber's log bridge
/// picks those records up when the subscriber is installed.
pub fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    // Keep any subscriber that is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

//! Log subscriber setup.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up and writes them to stderr, leaving stdout for JSON.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and no `-v` is given.
pub const DEFAULT_FILTER: &str = "warn,protogate=info";

/// Filter directive for a `-v` count.
pub fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_FILTER,
        1 => "warn,protogate=debug",
        _ => "warn,protogate=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Logging already initialized: {e}");
    }
}

//! Diagnostic logging to stderr
//!
//! User-facing progress goes to stdout with `println!`; `tracing` events are for
//! diagnosing a run and stay quiet unless asked for.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "scinstall=debug"
    } else {
        "scinstall=warn"
    }
}

/// Install the global subscriber; `RUST_LOG` wins over `--verbose`
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be set (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

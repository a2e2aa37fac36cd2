//! Diagnostic logging.
//!
//! Log events go to stderr through `tracing-subscriber` so they never mix
//! with the status text on stdout. `RUST_LOG` wins over `-v` when set.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "lockfile_sync=warn",
        1 => "lockfile_sync=info",
        _ => "lockfile_sync=debug",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "lockfile_sync=warn");
        assert_eq!(default_directive(1), "lockfile_sync=info");
        assert_eq!(default_directive(2), "lockfile_sync=debug");
        assert_eq!(default_directive(9), "lockfile_sync=debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}

// src/log.rs
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, from the binary.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
/// Output goes to stderr so `--print` output on stdout stays machine-readable.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (tests, embedding) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

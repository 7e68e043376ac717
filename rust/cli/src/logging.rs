//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `warn`, or `debug` for the engine when `verbose` is set.
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,shoe_engine=debug,shoe_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

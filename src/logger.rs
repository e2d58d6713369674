//! Log output setup.
//!
//! The crate logs through the `log` facade. `tracing-subscriber` formats the
//! records onto stderr, with its `log` bridge forwarding them.

use tracing_subscriber::filter::LevelFilter;

/// Level for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber at the level for `verbosity`.
///
/// # Errors
///
/// Fails if a global subscriber or `log` logger is already installed.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .try_init()
}

//! Logging through `tracing` and `tracing-subscriber`
//!
//! Logs go to stderr so command output on stdout stays usable with `--json`.
//!
//! Filter precedence:
//! 1. `QUIZBANK_LOG` environment variable (full `EnvFilter` syntax)
//! 2. `-v` count on the command line
//! 3. `[logging] level` in quizbank/config.toml

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "QUIZBANK_LOG";

/// Resolve the filter directive from verbosity and the configured level
///
/// - 0 (no `-v`): configured level
/// - 1 (`-v`): info
/// - 2 (`-vv`): debug
/// - 3+ (`-vvv`): trace
pub fn level_for_verbosity(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber
pub fn init_logging(verbosity: u8, configured: &str) -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive)?,
        _ => EnvFilter::try_new(level_for_verbosity(verbosity, configured))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

//! Structured logging setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for results. `RUST_LOG` is
//! honored unless `-v`/`-q` pick a level explicitly.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Level implied by the verbosity flags, if any were given.
pub fn level_for(verbosity: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: u8, quiet: bool, format: LogFormat) {
    let filter = match level_for(verbosity, quiet) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(err) = installed {
        tracing::debug!(error = %err, "subscriber already installed, keeping it");
    }
}

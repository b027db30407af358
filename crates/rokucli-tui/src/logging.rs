//! Logging setup.
//!
//! The alternate screen owns the terminal, so logs only go to a file. Without
//! `--log-file` no subscriber is installed and `tracing` macros are no-ops.

use std::{fs::File, io, path::Path, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber writing to `log_file`.
///
/// `RUST_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Fails if the file cannot be opened or a subscriber is already installed.
pub fn init(log_file: Option<&Path>, level: &str) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::options().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()
        .map_err(io::Error::other)
}

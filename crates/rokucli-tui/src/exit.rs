//! Process exit reporting.
//!
//! Maps how a run ended to the diagnostic printed on stderr and the process
//! status. Kept apart from `main` so the mapping is testable.

use std::process::ExitCode;

use rokucli_app::RuntimeError;

/// How the process ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Line for stderr, printed after the terminal is restored.
    pub diagnostic: Option<String>,
    /// Process exit status.
    pub status: u8,
}

impl Exit {
    /// Normal exit: quit key, Ctrl+C, end of input, or no device found.
    pub fn success() -> Self {
        Self { diagnostic: None, status: 0 }
    }

    /// Exit with status 1 and a diagnostic.
    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self { diagnostic: Some(diagnostic.into()), status: 1 }
    }

    /// Map the outcome of [`rokucli_app::Runtime::run`].
    pub fn from_session<E>(result: &Result<(), RuntimeError<E>>) -> Self
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(()) => Self::success(),
            Err(RuntimeError::Communication { device, source }) => {
                tracing::warn!(%device, error = %source, "session ended");
                Self::failure(format!("Unable to communicate with device at {device}"))
            },
            Err(RuntimeError::Driver(e)) => {
                tracing::warn!(error = %e, "terminal failure");
                Self::failure(e.to_string())
            },
        }
    }

    /// Process exit code.
    pub fn code(&self) -> ExitCode {
        ExitCode::from(self.status)
    }
}

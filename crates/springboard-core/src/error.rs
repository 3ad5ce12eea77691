//! Error types for Springboard.
//!
//! Every failure the stub can hit maps to the same process exit code; the
//! variants exist so the diagnostic on stderr says what actually went wrong.

use crate::config::StubConfig;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Springboard operations.
#[derive(Debug, Error)]
pub enum SpringboardError {
    #[error("Unable to determine own executable name: {message}")]
    ExecutableNameUnavailable {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Unable to determine working directory: {message}")]
    WorkingDirUnavailable {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("No launchable version under {root}: {message}")]
    VersionResolutionFailed {
        root: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to start {executable}: {message}")]
    SpawnFailed {
        executable: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for Springboard operations.
pub type Result<T> = std::result::Result<T, SpringboardError>;

impl SpringboardError {
    /// The stub's exit code for this error.
    ///
    /// The stub contract has exactly two outcomes: 0 when the application was
    /// started, 1 otherwise. Every variant collapses to the failure code; the
    /// variant only shapes the diagnostic.
    pub fn exit_code(&self) -> i32 {
        StubConfig::EXIT_FAILURE
    }
}

//! Platform adapters: config path resolution, persistence, screen clearing.
//!
//! Each supported OS gets one [`Platform`] implementation; [`detect`] picks
//! the one for the running OS at startup.  Only Linux is implemented, so
//! every other OS fails at detection time with no fallback.
//!
//! # Testability
//!
//! The `Platform` trait lets unit and integration tests point the store at a
//! temp directory via [`mock::MockPlatform`] instead of the real user home.

use std::path::{Path, PathBuf};

use modgroup_core::ConfigFile;
use thiserror::Error;

pub mod mock;

#[cfg(target_os = "linux")]
pub mod linux;

/// Error type for platform operations.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The running OS has no platform adapter.
    #[error("unsupported platform `{os}`: only linux is supported")]
    Unsupported { os: &'static str },

    /// The invoking user's login name could not be determined.
    #[error("could not determine the invoking user: neither USER nor LOGNAME is set")]
    NoUser,

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The terminal-clear command could not be run.
    #[error("failed to clear the screen: {0}")]
    ClearScreen(#[source] std::io::Error),
}

/// OS-specific capability set used by the config store.
pub trait Platform {
    /// Absolute path of the per-user config file.
    fn config_file_path(&self) -> &Path;

    /// Overwrites the config file with the pretty-printed JSON form of
    /// `config`.
    fn persist(&self, config: &ConfigFile) -> Result<(), PlatformError>;

    /// Clears the terminal using the OS's native facility.
    fn clear_screen(&self) -> Result<(), PlatformError>;
}

/// Constructs the platform adapter for the running OS.
///
/// # Errors
///
/// Returns [`PlatformError::Unsupported`] on any OS without an adapter, or
/// the adapter's own construction error (e.g. [`PlatformError::NoUser`] on
/// Linux when the login name cannot be resolved).
pub fn detect() -> Result<Box<dyn Platform>, PlatformError> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(linux::LinuxPlatform::new()?))
    }

    #[cfg(not(target_os = "linux"))]
    {
        Err(PlatformError::Unsupported {
            os: std::env::consts::OS,
        })
    }
}

/// Serializes `config` with 2-space indentation and writes it to `path`.
///
/// Shared by the Linux adapter and the mock so both produce byte-identical
/// files.
pub(crate) fn write_pretty_json(path: &Path, config: &ConfigFile) -> Result<(), PlatformError> {
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| PlatformError::Io {
        path: path.to_path_buf(),
        source,
    })
}

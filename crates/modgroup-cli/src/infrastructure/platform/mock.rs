//! Mock platform adapter for tests.
//!
//! Points the store at an arbitrary path (typically inside a `tempfile`
//! directory) and counts `clear_screen` calls instead of touching the
//! terminal.  Persistence goes through the same pretty-JSON writer as the
//! Linux adapter, so files written by the mock are byte-identical to real
//! ones.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use modgroup_core::ConfigFile;

use super::{write_pretty_json, Platform, PlatformError};

/// A test double for [`Platform`] backed by a caller-chosen path.
pub struct MockPlatform {
    config_path: PathBuf,
    clear_calls: Arc<AtomicU32>,
}

impl MockPlatform {
    /// Creates a mock whose config file lives at `config_path`.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            clear_calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Handle to the clear-screen call counter, usable after the mock has
    /// been boxed and moved into a store.
    pub fn clear_counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.clear_calls)
    }
}

impl Platform for MockPlatform {
    fn config_file_path(&self) -> &Path {
        &self.config_path
    }

    fn persist(&self, config: &ConfigFile) -> Result<(), PlatformError> {
        write_pretty_json(&self.config_path, config)
    }

    fn clear_screen(&self) -> Result<(), PlatformError> {
        self.clear_calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

//! The config store: load-on-open, mutate in memory, save on request.
//!
//! `ConfigStore` owns a [`GroupRegistry`] plus the platform adapter it was
//! constructed with.  Opening the store performs first-run setup (create the
//! parent directory and a default `{"groups": []}` file) and the documented
//! corrupt-file recovery: malformed JSON is discarded, the file is rewritten
//! with the default, and a warning names the path so the data loss is not
//! silent.
//!
//! Mutations (`add_group`, `remove_group`) touch only the in-memory state;
//! nothing reaches disk until an explicit [`ConfigStore::save`].  There is no
//! locking: a concurrent writer to the same file races, last writer wins.

use std::path::{Path, PathBuf};

use modgroup_core::{ConfigFile, GroupError, GroupRegistry, ModGroup};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::infrastructure::platform::{Platform, PlatformError};

/// Error type for store open/save operations.
///
/// Group-level failures (duplicates, unknown loaders, missing names) are
/// [`GroupError`]s, reported by the mutation methods instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform adapter failed (persistence or screen clearing).
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A file system I/O error occurred while reading the config.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// In-memory view of the config file, bound to one platform adapter.
pub struct ConfigStore {
    registry: GroupRegistry,
    platform: Box<dyn Platform>,
}

impl ConfigStore {
    /// Opens the store: reads and parses the config file, creating it with
    /// the empty default on first run.
    ///
    /// Malformed JSON is recovered by resetting to the default and
    /// rewriting the file; the previous contents are discarded with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for read failures other than "not found"
    /// and [`StoreError::Platform`] if the default file cannot be written.
    pub fn open(platform: Box<dyn Platform>) -> Result<Self, StoreError> {
        let path = platform.config_file_path().to_path_buf();

        let registry = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<ConfigFile>(&content) {
                Ok(config) => {
                    debug!(path = %path.display(), groups = config.groups.len(), "config loaded");
                    GroupRegistry::from_config(config)
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "config is not valid JSON; discarding its contents and \
                         resetting to the empty default"
                    );
                    platform.persist(&ConfigFile::default())?;
                    GroupRegistry::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(dir) = path.parent() {
                    std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                        path: dir.to_path_buf(),
                        source,
                    })?;
                }
                platform.persist(&ConfigFile::default())?;
                info!(path = %path.display(), "created default config");
                GroupRegistry::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self { registry, platform })
    }

    /// Adds a group.  In-memory only; call [`save`](Self::save) to persist.
    ///
    /// # Errors
    ///
    /// [`GroupError::DuplicateName`], [`GroupError::UnknownLoader`], or
    /// [`GroupError::EmptyName`]; the store is unchanged on error.
    pub fn add_group(&mut self, name: &str, loader: &str) -> Result<(), GroupError> {
        self.registry.add(name, loader)
    }

    /// Removes a group by name, returning the removed entry.  In-memory
    /// only.
    ///
    /// # Errors
    ///
    /// [`GroupError::NotFound`] if no group has this name.
    pub fn remove_group(&mut self, name: &str) -> Result<ModGroup, GroupError> {
        self.registry.remove(name)
    }

    /// Iterates over the groups in stored order.
    pub fn groups(&self) -> impl Iterator<Item = &ModGroup> {
        self.registry.groups()
    }

    /// Persists the current in-memory state verbatim.
    pub fn save(&self) -> Result<(), StoreError> {
        self.platform.persist(self.registry.config_file())?;
        debug!(groups = self.registry.len(), "config saved");
        Ok(())
    }

    /// Path of the backing config file.
    pub fn config_file_path(&self) -> &Path {
        self.platform.config_file_path()
    }

    /// Clears the terminal via the platform adapter.
    pub fn clear_screen(&self) -> Result<(), StoreError> {
        self.platform.clear_screen()?;
        Ok(())
    }
}

//! Linux platform adapter.
//!
//! Resolves the config file to `/home/<user>/.config/minecraft-mod-config.json`,
//! where `<user>` is the login name of the invoking user (`USER`, then
//! `LOGNAME`).  The original tool deliberately builds the path from the login
//! name rather than reading `$HOME`; that behavior is kept.

use std::path::{Path, PathBuf};
use std::process::Command;

use modgroup_core::ConfigFile;

use super::{write_pretty_json, Platform, PlatformError};

const CONFIG_FILE_NAME: &str = "minecraft-mod-config.json";

/// Platform adapter for Linux-like systems.
pub struct LinuxPlatform {
    config_path: PathBuf,
}

impl LinuxPlatform {
    /// Resolves the config path for the invoking user.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoUser`] when neither `USER` nor `LOGNAME`
    /// is set.
    pub fn new() -> Result<Self, PlatformError> {
        let user = std::env::var_os("USER")
            .or_else(|| std::env::var_os("LOGNAME"))
            .ok_or(PlatformError::NoUser)?;

        let config_path = PathBuf::from("/home")
            .join(user)
            .join(".config")
            .join(CONFIG_FILE_NAME);
        Ok(Self { config_path })
    }
}

impl Platform for LinuxPlatform {
    fn config_file_path(&self) -> &Path {
        &self.config_path
    }

    fn persist(&self, config: &ConfigFile) -> Result<(), PlatformError> {
        write_pretty_json(&self.config_path, config)
    }

    fn clear_screen(&self) -> Result<(), PlatformError> {
        // Exit status is not checked, matching the original tool; a missing
        // `clear` binary is the only reported failure.
        Command::new("clear")
            .status()
            .map_err(PlatformError::ClearScreen)?;
        Ok(())
    }
}

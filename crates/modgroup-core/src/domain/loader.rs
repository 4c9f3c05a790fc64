//! The closed set of supported mod loaders.
//!
//! A mod group targets exactly one loader runtime.  The set is fixed at
//! compile time; strings coming from the CLI or from hand-edited config
//! files are validated against it via [`ModLoader::from_str`].

use serde::{Deserialize, Serialize};

/// A Minecraft mod-loader runtime.
///
/// Serialized in lowercase (`"forge"`, `"fabric"`, ...) both on disk and in
/// user-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModLoader {
    Forge,
    Fabric,
    Quilt,
    NeoForge,
}

impl ModLoader {
    /// Every known loader, in display order.
    pub const ALL: [ModLoader; 4] = [
        ModLoader::Forge,
        ModLoader::Fabric,
        ModLoader::Quilt,
        ModLoader::NeoForge,
    ];

    /// The lowercase canonical name, as it appears in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModLoader::Forge => "forge",
            ModLoader::Fabric => "fabric",
            ModLoader::Quilt => "quilt",
            ModLoader::NeoForge => "neoforge",
        }
    }
}

impl std::fmt::Display for ModLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModLoader {
    type Err = super::group::GroupError;

    /// Case-insensitive lookup over the known set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forge" => Ok(ModLoader::Forge),
            "fabric" => Ok(ModLoader::Fabric),
            "quilt" => Ok(ModLoader::Quilt),
            "neoforge" => Ok(ModLoader::NeoForge),
            _ => Err(super::group::GroupError::UnknownLoader {
                got: s.to_string(),
            }),
        }
    }
}

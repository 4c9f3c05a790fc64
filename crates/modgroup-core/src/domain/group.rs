//! Mod group wire types and the domain error vocabulary.
//!
//! `ConfigFile` is the exact shape persisted to disk:
//!
//! ```json
//! {
//!   "groups": [
//!     { "name": "vanilla-plus", "mod_loader": "forge" }
//!   ]
//! }
//! ```
//!
//! Group order in the file is insertion order; nothing sorts it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::loader::ModLoader;

/// A named collection of mods targeting a single loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModGroup {
    /// Unique, non-empty group name.  Uniqueness is enforced by
    /// [`GroupRegistry`](super::registry::GroupRegistry), not by this type.
    pub name: String,
    /// The loader runtime this group targets.
    pub mod_loader: ModLoader,
}

/// Top-level on-disk config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Groups in insertion order.
    #[serde(default)]
    pub groups: Vec<ModGroup>,
}

/// Errors produced by group mutations.
///
/// Each variant corresponds to one documented failure mode; callers are
/// expected to match on the variant rather than parse the message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    /// A group with this name already exists.
    #[error("a group named `{0}` already exists")]
    DuplicateName(String),

    /// The loader string is not one of the known loaders.
    #[error("unknown mod loader `{got}`; valid loaders are {}", valid_loaders())]
    UnknownLoader { got: String },

    /// No group with this name exists.
    #[error("no group named `{0}` was found")]
    NotFound(String),

    /// Group names must be non-empty.
    #[error("group name must not be empty")]
    EmptyName,
}

/// Comma-separated list of valid loader names, for error messages.
fn valid_loaders() -> String {
    ModLoader::ALL
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_serializes_to_documented_shape() {
        let config = ConfigFile {
            groups: vec![ModGroup {
                name: "vanilla-plus".to_string(),
                mod_loader: ModLoader::Forge,
            }],
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "groups": [{ "name": "vanilla-plus", "mod_loader": "forge" }]
            })
        );
    }

    #[test]
    fn test_config_file_default_is_empty_groups() {
        let config = ConfigFile::default();
        assert!(config.groups.is_empty());
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"groups":[]}"#);
    }

    #[test]
    fn test_missing_groups_key_deserializes_as_empty() {
        let config: ConfigFile = serde_json::from_str("{}").unwrap();
        assert!(config.groups.is_empty());
    }

    #[test]
    fn test_unknown_loader_error_message_lists_valid_loaders() {
        let err = GroupError::UnknownLoader {
            got: "rift".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rift"));
        assert!(msg.contains("forge"));
        assert!(msg.contains("neoforge"));
    }
}

//! In-memory registry of mod groups.
//!
//! The registry owns the deserialized [`ConfigFile`] plus a derived
//! `HashSet` of used names so duplicate checks are O(1) regardless of how
//! many groups exist.
//!
//! # Invariant
//!
//! The name set is always exactly the set of `name` fields across
//! `config.groups`.  Every mutation updates both sides or neither: a failed
//! `add`/`remove` leaves the registry untouched.

use std::collections::HashSet;
use std::str::FromStr;

use super::group::{ConfigFile, GroupError, ModGroup};
use super::loader::ModLoader;

/// Ordered collection of mod groups with unique names.
#[derive(Debug, Default, Clone)]
pub struct GroupRegistry {
    config: ConfigFile,
    names: HashSet<String>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a parsed config file, deriving the name set
    /// from the group list.
    ///
    /// Duplicate names in a hand-edited file collapse into a single name-set
    /// entry; the group list itself is kept verbatim.
    pub fn from_config(config: ConfigFile) -> Self {
        let names = config.groups.iter().map(|g| g.name.clone()).collect();
        Self { config, names }
    }

    /// Validates and appends a new group.
    ///
    /// # Errors
    ///
    /// - [`GroupError::EmptyName`] if `name` is empty.
    /// - [`GroupError::DuplicateName`] if the name is already used.
    /// - [`GroupError::UnknownLoader`] if `loader` does not name a known
    ///   [`ModLoader`].
    pub fn add(&mut self, name: &str, loader: &str) -> Result<(), GroupError> {
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if self.names.contains(name) {
            return Err(GroupError::DuplicateName(name.to_string()));
        }
        let mod_loader = ModLoader::from_str(loader)?;

        self.config.groups.push(ModGroup {
            name: name.to_string(),
            mod_loader,
        });
        self.names.insert(name.to_string());
        Ok(())
    }

    /// Removes the group with the given name, returning it.
    ///
    /// The relative order of the remaining groups is preserved.  Filter
    /// semantics: if a hand-edited file held several groups with this name,
    /// all of them go; the first is the one returned.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NotFound`] if no group has this name.
    pub fn remove(&mut self, name: &str) -> Result<ModGroup, GroupError> {
        if !self.names.remove(name) {
            return Err(GroupError::NotFound(name.to_string()));
        }
        let mut removed = None;
        self.config.groups.retain(|g| {
            if g.name == name {
                removed.get_or_insert_with(|| g.clone());
                false
            } else {
                true
            }
        });
        removed.ok_or_else(|| GroupError::NotFound(name.to_string()))
    }

    /// Iterates over the groups in stored order.  Restartable and read-only.
    pub fn groups(&self) -> impl Iterator<Item = &ModGroup> {
        self.config.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.config.groups.len()
    }

    /// `true` if no groups exist.
    pub fn is_empty(&self) -> bool {
        self.config.groups.is_empty()
    }

    /// Returns `true` if a group with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// The current state, in the exact shape persisted to disk.
    pub fn config_file(&self) -> &ConfigFile {
        &self.config
    }
}

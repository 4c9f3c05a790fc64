//! Domain entities for minecraft-mod-config.
//!
//! Pure business rules with no infrastructure dependencies:
//!
//! - **`loader`**   – The closed set of mod loaders a group can target.
//! - **`group`**    – The `ModGroup` / `ConfigFile` wire types and the
//!   domain error vocabulary.
//! - **`registry`** – The ordered group collection with its name-uniqueness
//!   invariant.
//!
//! Outer layers (the config store, the CLI) depend on this module; it never
//! depends on them.

pub mod group;
pub mod loader;
pub mod registry;

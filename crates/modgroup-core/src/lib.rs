//! # modgroup-core
//!
//! Domain crate for minecraft-mod-config: the mod-loader vocabulary, the
//! on-disk config file shape, and the in-memory group registry that enforces
//! name uniqueness.
//!
//! This crate has zero dependencies on OS APIs or the file system.  Reading
//! and writing the actual config file is the job of the application crate
//! (`modgroup-cli`); everything here can be compiled and tested anywhere.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `modgroup_core::GroupRegistry` instead of the full module path.
pub use domain::group::{ConfigFile, GroupError, ModGroup};
pub use domain::loader::ModLoader;
pub use domain::registry::GroupRegistry;

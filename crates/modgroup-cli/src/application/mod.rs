//! Application layer: the config store.
//!
//! Sits between the domain (`modgroup_core`) and the infrastructure
//! (`crate::infrastructure::platform`).  The store orchestrates the group
//! registry and the platform adapter to fulfil the user-facing operations:
//! load on open, add/remove/list in memory, persist on an explicit save.
//!
//! It depends on the [`Platform`](crate::infrastructure::platform::Platform)
//! trait rather than a concrete OS adapter, so tests can drive it with the
//! mock platform and a temp directory.

pub mod store;

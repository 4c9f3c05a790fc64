//! Infrastructure layer: OS-facing adapters.
//!
//! **Dependency rule**: this layer may be depended on by `application`, but
//! must not import from it.

pub mod platform;

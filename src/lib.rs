//! Workspace-level package hosting the integration tests and demos.
//!
//! Re-exports the `value_check` library so tests can use either path.

pub use value_check::*;

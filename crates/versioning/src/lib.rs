//! Project versioning subsystem.
//!
//! Snapshots a project's editable state and generated output into immutable
//! version records with per-project monotonic numbering, and restores prior
//! snapshots back onto the live project (itself recorded as a new version so
//! the pre-restore state is never lost).
//!
//! Nothing in this crate retries automatically: each failure is classified
//! into the most specific [`VersionError`] kind so the caller can decide what
//! is safe to retry.

pub mod error;
pub mod workflow;

pub use error::VersionError;
pub use workflow::{create_version, create_version_for_project, restore_version, RestoreOutcome};

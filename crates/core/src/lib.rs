//! Pure domain types for planforge.
//!
//! This crate has no database or HTTP dependencies so it can be used by the
//! repository layer, the versioning workflows, and any future CLI tooling.

pub mod plan;
pub mod snapshot;
pub mod types;

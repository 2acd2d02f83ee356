//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_output_repo;
pub mod project_repo;
pub mod project_version_repo;

pub use project_output_repo::ProjectOutputRepo;
pub use project_repo::ProjectRepo;
pub use project_version_repo::ProjectVersionRepo;

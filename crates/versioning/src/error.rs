//! Error taxonomy for the versioning workflows.

use planforge_core::types::DbId;

/// Failure kinds surfaced by the version subsystem.
///
/// The composite kinds (`VersionCreationFailed`, `PointerUpdateFailed`,
/// `PartialRestore`, `RestoreSucceededVersionLogFailed`) name exactly which
/// workflow step failed and carry the ids involved, so a caller can decide
/// what to retry and what to reconcile manually.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A version number collision. The counter authority makes this
    /// impossible in correct operation; seeing it means the counter was
    /// raced or bypassed.
    #[error("version {version_number} already exists for project {project_id}")]
    DuplicateVersion { project_id: DbId, version_number: i32 },

    /// The target version belongs to a different project, or its embedded
    /// snapshot could not be decoded.
    #[error("version {version_id} is not a valid restore target for project {project_id}: {reason}")]
    InvalidVersion {
        project_id: DbId,
        version_id: DbId,
        reason: String,
    },

    /// The backing store was unavailable or timed out. Safe to retry for
    /// reads; for writes, check what the prior attempt persisted first.
    #[error("backing store unavailable: {0}")]
    TransientStore(#[source] sqlx::Error),

    /// The append step failed after a version number was issued. The number
    /// is burned: it will never be reused, leaving a tolerated gap.
    #[error("failed to create version {version_number} for project {project_id}")]
    VersionCreationFailed {
        project_id: DbId,
        version_number: i32,
        #[source]
        source: Box<VersionError>,
    },

    /// The version record was appended but the project's `current_version`
    /// pointer could not be advanced. The record is durable; the pointer may
    /// lag until the caller reconciles against the latest stored version.
    #[error("version {version_number} created but pointer update failed for project {project_id}")]
    PointerUpdateFailed {
        project_id: DbId,
        version_number: i32,
        #[source]
        source: Box<VersionError>,
    },

    /// Restore updated the project fields but failed to apply the embedded
    /// output snapshot. Project content and plan content may differ until
    /// the output step is retried.
    #[error("restore of version {version_id} left project {project_id} with stale output")]
    PartialRestore {
        project_id: DbId,
        version_id: DbId,
        #[source]
        source: Box<VersionError>,
    },

    /// Restore fully applied but could not be logged as a new version.
    /// Functionally the restore worked; history under-reports it until a
    /// version record is created for the current state.
    #[error("restore of version {version_id} for project {project_id} succeeded but was not logged")]
    RestoreSucceededVersionLogFailed {
        project_id: DbId,
        version_id: DbId,
        #[source]
        source: Box<VersionError>,
    },
}

/// Classify a raw store failure from the version store's append path.
///
/// PostgreSQL unique violations (code 23505) on the per-project version
/// number constraint become [`VersionError::DuplicateVersion`]; everything
/// else is a transient store failure.
pub(crate) fn classify_append_error(
    err: sqlx::Error,
    project_id: DbId,
    version_number: i32,
) -> VersionError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some("uq_project_versions_project_number")
        {
            return VersionError::DuplicateVersion {
                project_id,
                version_number,
            };
        }
    }
    VersionError::TransientStore(err)
}

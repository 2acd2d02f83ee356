//! Version creation and restore workflows.
//!
//! Within one invocation the steps execute in the documented order; across
//! concurrent invocations for the same project, the counter authority
//! ([`ProjectRepo::next_version_number`]) is the sole serialization point
//! preventing duplicate version numbers.

use sqlx::PgPool;

use planforge_core::plan::PlanContent;
use planforge_core::snapshot::VersionSnapshot;
use planforge_core::types::DbId;
use planforge_db::models::project::Project;
use planforge_db::models::project_version::{CreateProjectVersion, ProjectVersion};
use planforge_db::repositories::{ProjectOutputRepo, ProjectRepo, ProjectVersionRepo};

use crate::error::{classify_append_error, VersionError};

/// Result of a successful restore: the updated live project and the version
/// record that logged the restore.
#[derive(Debug)]
pub struct RestoreOutcome {
    pub project: Project,
    pub new_version: ProjectVersion,
}

/// Snapshot the given project state and generated output into a new
/// immutable version record, then advance the project's version pointer.
///
/// Steps:
/// 1. Obtain the next version number from the counter authority. Failure
///    aborts with nothing written.
/// 2. Build the snapshot from `project` and `output` (pure).
/// 3. Append the snapshot to the version store under the obtained number.
///    Failure burns the number and surfaces
///    [`VersionError::VersionCreationFailed`] (or
///    [`VersionError::DuplicateVersion`] on a numbering collision).
/// 4. Advance `current_version`. Failure after a successful append surfaces
///    [`VersionError::PointerUpdateFailed`]; the version record itself
///    remains durable and callers may reconcile by re-reading the latest
///    version from the store.
pub async fn create_version(
    pool: &PgPool,
    project: &Project,
    output: Option<&PlanContent>,
    created_by: Option<DbId>,
) -> Result<ProjectVersion, VersionError> {
    let version_number = ProjectRepo::next_version_number(pool, project.id)
        .await
        .map_err(VersionError::TransientStore)?
        .ok_or(VersionError::NotFound {
            entity: "project",
            id: project.id,
        })?;

    let snapshot = VersionSnapshot::capture(
        &project.title,
        project.idea_text.as_deref(),
        project.is_premium,
        output,
    );

    let input = CreateProjectVersion {
        project_id: project.id,
        version_number,
        title: snapshot.title,
        idea_text: snapshot.idea_text,
        is_premium: snapshot.is_premium,
        output_snapshot: snapshot.output.map(|content| content.to_json()),
        created_by,
    };

    let created = match ProjectVersionRepo::append(pool, &input).await {
        Ok(created) => created,
        Err(err) => {
            return Err(match classify_append_error(err, project.id, version_number) {
                duplicate @ VersionError::DuplicateVersion { .. } => duplicate,
                other => VersionError::VersionCreationFailed {
                    project_id: project.id,
                    version_number,
                    source: Box::new(other),
                },
            });
        }
    };

    let pointer_updated = ProjectRepo::set_current_version(pool, project.id, version_number)
        .await
        .map_err(|err| VersionError::PointerUpdateFailed {
            project_id: project.id,
            version_number,
            source: Box::new(VersionError::TransientStore(err)),
        })?;
    if !pointer_updated {
        // Project row vanished between append and pointer update.
        return Err(VersionError::PointerUpdateFailed {
            project_id: project.id,
            version_number,
            source: Box::new(VersionError::NotFound {
                entity: "project",
                id: project.id,
            }),
        });
    }

    tracing::info!(
        project_id = project.id,
        version_number = created.version_number,
        version_id = created.id,
        has_output = created.output_snapshot.is_some(),
        "Project version created"
    );

    Ok(created)
}

/// Snapshot a project's current live state (project row plus live output)
/// into a new version record.
///
/// Convenience entry point for callers that have not already loaded the
/// rows: edits, generation delivery, and explicit "save" requests.
pub async fn create_version_for_project(
    pool: &PgPool,
    project_id: DbId,
    created_by: Option<DbId>,
) -> Result<ProjectVersion, VersionError> {
    let project = ProjectRepo::find_by_id(pool, project_id)
        .await
        .map_err(VersionError::TransientStore)?
        .ok_or(VersionError::NotFound {
            entity: "project",
            id: project_id,
        })?;
    let output = ProjectOutputRepo::find_by_project(pool, project_id)
        .await
        .map_err(VersionError::TransientStore)?;
    let content = output.map(|row| row.content());
    create_version(pool, &project, content.as_ref(), created_by).await
}

/// Restore a past version onto the live project, then log the restore as a
/// new version so the pre-restore state remains recoverable.
///
/// Steps:
/// 1. Fetch the target version; reject cross-project targets and undecodable
///    snapshots before mutating anything.
/// 2. Overwrite the live project's title, idea text, and premium flag with
///    the version's copied values. Failure aborts.
/// 3. If the version embeds an output snapshot, upsert it onto the live
///    output; an absent snapshot leaves the live output untouched. Failure
///    after step 2 surfaces [`VersionError::PartialRestore`].
/// 4. Record the restored state as the newest version. Failure after steps
///    2-3 surfaces [`VersionError::RestoreSucceededVersionLogFailed`];
///    functionally the restore worked but history under-reports it.
pub async fn restore_version(
    pool: &PgPool,
    project_id: DbId,
    version_id: DbId,
    restored_by: Option<DbId>,
) -> Result<RestoreOutcome, VersionError> {
    let version = ProjectVersionRepo::find_by_id(pool, version_id)
        .await
        .map_err(VersionError::TransientStore)?
        .ok_or(VersionError::NotFound {
            entity: "project version",
            id: version_id,
        })?;

    if version.project_id != project_id {
        return Err(VersionError::InvalidVersion {
            project_id,
            version_id,
            reason: format!("version belongs to project {}", version.project_id),
        });
    }

    let snapshot_output: Option<PlanContent> = match &version.output_snapshot {
        Some(value) => Some(serde_json::from_value(value.clone()).map_err(|err| {
            VersionError::InvalidVersion {
                project_id,
                version_id,
                reason: format!("embedded output snapshot is not decodable: {err}"),
            }
        })?),
        None => None,
    };

    let mut project = ProjectRepo::apply_version_fields(
        pool,
        project_id,
        &version.title,
        version.idea_text.as_deref(),
        version.is_premium,
    )
    .await
    .map_err(VersionError::TransientStore)?
    .ok_or(VersionError::NotFound {
        entity: "project",
        id: project_id,
    })?;

    if let Some(content) = &snapshot_output {
        ProjectOutputRepo::upsert(pool, project_id, content)
            .await
            .map_err(|err| VersionError::PartialRestore {
                project_id,
                version_id,
                source: Box::new(VersionError::TransientStore(err)),
            })?;
    }

    // The logged version embeds whatever the live output is after step 3:
    // the restored snapshot when one was embedded, otherwise the untouched
    // pre-restore output.
    let content_to_log = match snapshot_output {
        Some(content) => Some(content),
        None => ProjectOutputRepo::find_by_project(pool, project_id)
            .await
            .map_err(|err| VersionError::RestoreSucceededVersionLogFailed {
                project_id,
                version_id,
                source: Box::new(VersionError::TransientStore(err)),
            })?
            .map(|row| row.content()),
    };

    let new_version = create_version(pool, &project, content_to_log.as_ref(), restored_by)
        .await
        .map_err(|err| VersionError::RestoreSucceededVersionLogFailed {
            project_id,
            version_id,
            source: Box::new(err),
        })?;
    project.current_version = new_version.version_number;

    tracing::info!(
        project_id,
        restored_version_id = version_id,
        from_version = version.version_number,
        new_version = new_version.version_number,
        "Project version restored"
    );

    Ok(RestoreOutcome {
        project,
        new_version,
    })
}

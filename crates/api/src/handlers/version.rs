//! Version history handlers: list, fetch, explicit save, and restore.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use planforge_core::types::DbId;
use planforge_db::models::project_version::CreateVersionRequest;
use planforge_db::repositories::{ProjectRepo, ProjectVersionRepo};
use planforge_versioning::{create_version_for_project, restore_version};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /projects/{id}/versions
// ---------------------------------------------------------------------------

/// List a project's version history, newest first.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Distinguish "no versions yet" (empty list) from "no such project" (404).
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::NotFound {
            entity: "project",
            id: project_id,
        })?;

    let versions = ProjectVersionRepo::list_by_project(&state.pool, project_id).await?;

    tracing::debug!(project_id, count = versions.len(), "Listed versions");

    Ok(Json(DataResponse { data: versions }))
}

// ---------------------------------------------------------------------------
// GET /versions/{id}
// ---------------------------------------------------------------------------

/// Fetch a single version record by its own identifier.
pub async fn get_version(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let version = ProjectVersionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound {
            entity: "project version",
            id,
        })?;

    Ok(Json(DataResponse { data: version }))
}

// ---------------------------------------------------------------------------
// POST /projects/{id}/versions
// ---------------------------------------------------------------------------

/// Snapshot the project's current state as a new version (explicit save).
pub async fn create_version(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    body: Option<Json<CreateVersionRequest>>,
) -> AppResult<impl IntoResponse> {
    let created_by = body.and_then(|Json(req)| req.created_by);

    let version = create_version_for_project(&state.pool, project_id, created_by).await?;

    tracing::info!(
        project_id,
        version_number = version.version_number,
        "Version created on request"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: version })))
}

// ---------------------------------------------------------------------------
// POST /projects/{project_id}/versions/{version_id}/restore
// ---------------------------------------------------------------------------

/// Restore a past version onto the live project. The restore is itself
/// recorded as the newest version, so the pre-restore state stays
/// recoverable.
pub async fn restore(
    State(state): State<AppState>,
    Path((project_id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let outcome = restore_version(&state.pool, project_id, version_id, None).await?;

    tracing::info!(
        project_id,
        restored_version_id = version_id,
        new_version = outcome.new_version.version_number,
        "Version restored"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome.new_version })))
}

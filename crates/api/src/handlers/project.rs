//! Project handlers: CRUD plus generated-output delivery.
//!
//! Edits and output delivery both record a version through the versioning
//! workflow, so every material change to a project is recoverable.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use planforge_core::plan::PlanContent;
use planforge_core::types::DbId;
use planforge_db::models::project::{CreateProject, Project, UpdateProject};
use planforge_db::models::project_output::ProjectOutput;
use planforge_db::models::project_version::ProjectVersion;
use planforge_db::repositories::{ProjectOutputRepo, ProjectRepo};
use planforge_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted project title length.
const MAX_TITLE_LEN: usize = 200;

/// A project together with its live generated output, if any.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub output: Option<ProjectOutput>,
}

/// A mutated project together with the version that recorded the change.
#[derive(Debug, Serialize)]
pub struct ProjectWithVersion {
    pub project: Project,
    pub version: ProjectVersion,
}

/// The delivered output together with the version that recorded it.
#[derive(Debug, Serialize)]
pub struct OutputWithVersion {
    pub output: ProjectOutput,
    pub version: ProjectVersion,
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(AppError::BadRequest(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

async fn ensure_project_exists(pool: &DbPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound {
            entity: "project",
            id,
        })
}

// ---------------------------------------------------------------------------
// POST /projects
// ---------------------------------------------------------------------------

/// Create a new project. The project starts unversioned; the first version
/// is recorded on the first edit, generation, or explicit save.
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_title(&body.title)?;

    let project = ProjectRepo::create(&state.pool, &body).await?;

    tracing::info!(project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

/// List all projects, most recently updated first.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;

    tracing::debug!(count = projects.len(), "Listed projects");

    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// GET /projects/{id}
// ---------------------------------------------------------------------------

/// Fetch a project together with its live generated output.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ensure_project_exists(&state.pool, id).await?;
    let output = ProjectOutputRepo::find_by_project(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ProjectDetail { project, output },
    }))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}
// ---------------------------------------------------------------------------

/// Update a project's editable fields and record the edit as a new version.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = body.title {
        validate_title(title)?;
    }

    let mut project = ProjectRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::NotFound {
            entity: "project",
            id,
        })?;

    let version = planforge_versioning::create_version_for_project(&state.pool, id, None).await?;
    // The workflow advanced the stored pointer after the row above was read.
    project.current_version = version.version_number;

    tracing::info!(
        project_id = id,
        version_number = version.version_number,
        "Project updated and versioned"
    );

    Ok(Json(DataResponse {
        data: ProjectWithVersion { project, version },
    }))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}/output
// ---------------------------------------------------------------------------

/// Accept generated plan content from the generation pipeline, upsert it as
/// the live output, and record the delivery as a new version.
pub async fn put_output(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(content): Json<PlanContent>,
) -> AppResult<impl IntoResponse> {
    ensure_project_exists(&state.pool, id).await?;

    let output = ProjectOutputRepo::upsert(&state.pool, id, &content).await?;
    let version = planforge_versioning::create_version_for_project(&state.pool, id, None).await?;

    tracing::info!(
        project_id = id,
        version_number = version.version_number,
        "Generated output delivered and versioned"
    );

    Ok(Json(DataResponse {
        data: OutputWithVersion { output, version },
    }))
}

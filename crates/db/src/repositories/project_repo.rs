//! Repository for the `projects` table.

use sqlx::PgPool;

use planforge_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, idea_text, is_premium, current_version, version_seq, created_at, updated_at";

/// Provides CRUD and version-bookkeeping operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `is_premium` is `None` in the input, defaults to `false`. The
    /// project starts with `current_version = 0` and `version_seq = 0`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, idea_text, is_premium)
             VALUES ($1, $2, COALESCE($3, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.idea_text)
            .bind(input.is_premium)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY updated_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project's editable fields. Only non-`None` fields in `input`
    /// are applied. Bumps `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                idea_text = COALESCE($3, idea_text),
                is_premium = COALESCE($4, is_premium),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.idea_text)
            .bind(input.is_premium)
            .fetch_optional(pool)
            .await
    }

    /// Issue the next unused version number for a project.
    ///
    /// This is the counter authority: a single atomic fetch-and-increment of
    /// `version_seq`, so no two calls (even concurrent ones) can ever return
    /// the same number for one project. A number issued here is consumed
    /// whether or not a version record is later appended with it; failed
    /// appends leave tolerated gaps rather than risking duplicates.
    ///
    /// Returns `None` if the project does not exist.
    pub async fn next_version_number(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "UPDATE projects SET version_seq = version_seq + 1
             WHERE id = $1
             RETURNING version_seq",
        )
        .bind(project_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(n,)| n))
    }

    /// Advance the project's version pointer to `version_number`.
    ///
    /// Returns `true` if a row was updated.
    pub async fn set_current_version(
        pool: &PgPool,
        project_id: DbId,
        version_number: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET current_version = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(project_id)
        .bind(version_number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the project's editable fields from a version snapshot and
    /// bump `updated_at`. Used by the restore workflow.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn apply_version_fields(
        pool: &PgPool,
        id: DbId,
        title: &str,
        idea_text: Option<&str>,
        is_premium: bool,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                idea_text = $3,
                is_premium = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(title)
            .bind(idea_text)
            .bind(is_premium)
            .fetch_optional(pool)
            .await
    }
}

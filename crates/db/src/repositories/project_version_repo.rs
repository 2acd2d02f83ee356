//! Repository for the append-only `project_versions` table.
//!
//! `append` is the only mutating operation; no update or delete method
//! exists. This is the durability guarantee of the version history.

use sqlx::PgPool;

use planforge_core::types::DbId;

use crate::models::project_version::{CreateProjectVersion, ProjectVersion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, version_number, title, idea_text, is_premium, \
    output_snapshot, created_by, created_at";

/// Provides append and read operations for project versions.
pub struct ProjectVersionRepo;

impl ProjectVersionRepo {
    /// Append a version record under an explicitly issued version number.
    ///
    /// The `uq_project_versions_project_number` unique constraint rejects a
    /// duplicate `(project_id, version_number)` pair; in correct operation
    /// the counter authority makes that impossible, so a violation indicates
    /// a raced or bypassed counter.
    pub async fn append(
        pool: &PgPool,
        input: &CreateProjectVersion,
    ) -> Result<ProjectVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_versions
                (project_id, version_number, title, idea_text, is_premium,
                 output_snapshot, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectVersion>(&query)
            .bind(input.project_id)
            .bind(input.version_number)
            .bind(&input.title)
            .bind(&input.idea_text)
            .bind(input.is_premium)
            .bind(&input.output_snapshot)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a version by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_versions WHERE id = $1");
        sqlx::query_as::<_, ProjectVersion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all versions for a project, ordered by version number descending
    /// (most recent first). Empty vec if the project has no versions yet.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_versions
             WHERE project_id = $1
             ORDER BY version_number DESC"
        );
        sqlx::query_as::<_, ProjectVersion>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a specific version by project and version number.
    pub async fn find_by_project_and_number(
        pool: &PgPool,
        project_id: DbId,
        version_number: i32,
    ) -> Result<Option<ProjectVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_versions
             WHERE project_id = $1 AND version_number = $2"
        );
        sqlx::query_as::<_, ProjectVersion>(&query)
            .bind(project_id)
            .bind(version_number)
            .fetch_optional(pool)
            .await
    }

    /// Count the versions recorded for a project.
    pub async fn count_for_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM project_versions WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}

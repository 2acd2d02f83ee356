//! Project version models and DTOs.
//!
//! Defines the database row struct for the append-only `project_versions`
//! table and the create type used by the versioning workflows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use planforge_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// An immutable historical snapshot row from the `project_versions` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub id: DbId,
    pub project_id: DbId,
    pub version_number: i32,
    pub title: String,
    pub idea_text: Option<String>,
    pub is_premium: bool,
    /// Embedded deep copy of the plan content, or `NULL` when the version
    /// predates any generated output.
    pub output_snapshot: Option<serde_json::Value>,
    /// External auth subject reference; `NULL` for anonymous creation.
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for appending a new version record.
///
/// `version_number` must have been issued by the counter authority; the
/// unique constraint on `(project_id, version_number)` is the defensive
/// backstop against numbering collisions.
#[derive(Debug, Clone)]
pub struct CreateProjectVersion {
    pub project_id: DbId,
    pub version_number: i32,
    pub title: String,
    pub idea_text: Option<String>,
    pub is_premium: bool,
    pub output_snapshot: Option<serde_json::Value>,
    pub created_by: Option<DbId>,
}

// ---------------------------------------------------------------------------
// API request types
// ---------------------------------------------------------------------------

/// Request body for creating an explicit version ("save" from the UI).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVersionRequest {
    pub created_by: Option<DbId>,
}

//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use planforge_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub idea_text: Option<String>,
    pub is_premium: bool,
    /// Version pointer: number of the most recently created version record
    /// for this project, or 0 if none has ever been created.
    pub current_version: i32,
    /// Highest version number ever issued by the counter authority.
    /// Always >= `current_version`; the two differ when an issued number was
    /// burned by a failed append or a lagging pointer update.
    pub version_seq: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub idea_text: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_premium: Option<bool>,
}

/// DTO for updating a project's editable fields. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub idea_text: Option<String>,
    pub is_premium: Option<bool>,
}

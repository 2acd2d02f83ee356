pub mod health;
pub mod project;
pub mod version;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get (with live output), update
/// /projects/{id}/output                            deliver generated plan (PUT)
/// /projects/{id}/versions                          history (GET), explicit save (POST)
/// /projects/{project_id}/versions/{version_id}/restore   restore (POST)
/// /versions/{id}                                   single version (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(version::router())
}

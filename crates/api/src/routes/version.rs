use axum::routing::{get, post};
use axum::Router;

use crate::handlers::version;
use crate::state::AppState;

/// Version history routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{id}/versions",
            get(version::list_versions).post(version::create_version),
        )
        .route(
            "/projects/{project_id}/versions/{version_id}/restore",
            post(version::restore),
        )
        .route("/versions/{id}", get(version::get_version))
}

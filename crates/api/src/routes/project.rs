use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(project::list_projects).post(project::create_project),
        )
        .route(
            "/projects/{id}",
            get(project::get_project).put(project::update_project),
        )
        .route("/projects/{id}/output", put(project::put_output))
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Any path the bundle does not contain gets the entry page with 200,
    // unknown /api paths included.
    let frontend = ServeDir::new(&state.config.frontend_dir)
        .fallback(ServeFile::new(state.config.frontend_index()));
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    // A matched path with an unhandled method is treated as unmatched too.
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs)
                .post(jobs::handle_create_job)
                .fallback_service(frontend.clone()),
        )
        .route(
            "/api/jobs/:id",
            get(jobs::handle_get_job).fallback_service(frontend.clone()),
        )
        .route(
            "/api/applications",
            post(applications::handle_submit_application)
                .layer(upload_limit)
                .fallback_service(frontend.clone()),
        )
        .fallback_service(frontend)
        .with_state(state)
}

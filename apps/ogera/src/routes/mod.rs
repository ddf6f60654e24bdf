pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::shell::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/login", post(handlers::handle_login))
        .route("/api/v1/session/logout", post(handlers::handle_logout))
        .route(
            "/api/v1/session/identity",
            patch(handlers::handle_update_identity),
        )
        // Shell
        .route("/api/v1/menu", get(handlers::handle_get_menu))
        .route("/api/v1/shell", get(handlers::handle_get_shell))
        .route("/api/v1/shell/tab", put(handlers::handle_select_tab))
        .route(
            "/api/v1/shell/jobs/query",
            put(handlers::handle_set_job_query),
        )
        .route(
            "/api/v1/shell/jobs/:id/save",
            post(handlers::handle_toggle_saved),
        )
        .with_state(state)
}

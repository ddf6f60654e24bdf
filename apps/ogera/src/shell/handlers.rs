use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Identity, IdentityPatch, Role};
use crate::navigation::{items_for, MenuItem};
use crate::screens::{JobQuery, ScreenContext};
use crate::session::SessionSnapshot;
use crate::shell::{Shell, ShellView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct TabSelection {
    pub tab: String,
}

fn compose(state: &AppState, shell: &Shell, identity: Option<&Identity>) -> ShellView {
    match identity {
        Some(identity) => {
            let ctx = ScreenContext {
                identity,
                dataset: &state.dataset,
                directory: &state.directory,
                settings: &state.settings,
            };
            shell.compose(Some(&ctx), &state.directory)
        }
        None => shell.compose(None, &state.directory),
    }
}

async fn require_identity(state: &AppState) -> Result<Identity, AppError> {
    state.session.current().await.ok_or(AppError::Unauthorized)
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// POST /api/v1/session/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Identity>, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    let identity = state
        .session
        .login(&req.email, &req.password, req.role)
        .await?;
    state.shell.lock().await.reset();
    Ok(Json(identity))
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> StatusCode {
    state.session.logout().await;
    state.shell.lock().await.reset();
    StatusCode::NO_CONTENT
}

/// PATCH /api/v1/session/identity
pub async fn handle_update_identity(
    State(state): State<AppState>,
    Json(patch): Json<IdentityPatch>,
) -> Json<Option<Identity>> {
    Json(state.session.update_identity(patch).await)
}

/// GET /api/v1/menu
pub async fn handle_get_menu(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let identity = require_identity(&state).await?;
    Ok(Json(items_for(identity.role).to_vec()))
}

/// GET /api/v1/shell
pub async fn handle_get_shell(State(state): State<AppState>) -> Json<ShellView> {
    let identity = state.session.current().await;
    let shell = state.shell.lock().await;
    Json(compose(&state, &shell, identity.as_ref()))
}

/// PUT /api/v1/shell/tab
pub async fn handle_select_tab(
    State(state): State<AppState>,
    Json(req): Json<TabSelection>,
) -> Result<Json<ShellView>, AppError> {
    let identity = require_identity(&state).await?;
    let mut shell = state.shell.lock().await;
    let screen = shell.select_tab(&identity, &req.tab);
    info!("Tab '{}' selected by {} -> {screen:?}", req.tab, identity.email);
    Ok(Json(compose(&state, &shell, Some(&identity))))
}

/// PUT /api/v1/shell/jobs/query
pub async fn handle_set_job_query(
    State(state): State<AppState>,
    Json(query): Json<JobQuery>,
) -> Result<Json<ShellView>, AppError> {
    let identity = require_identity(&state).await?;
    let mut shell = state.shell.lock().await;
    let board = shell
        .job_board_mut(&identity)
        .ok_or_else(|| AppError::Validation("The job board is not the active screen".to_string()))?;
    board.query = query;
    Ok(Json(compose(&state, &shell, Some(&identity))))
}

/// POST /api/v1/shell/jobs/:id/save
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShellView>, AppError> {
    let identity = require_identity(&state).await?;
    if state.dataset.job(id).is_none() {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    let mut shell = state.shell.lock().await;
    let board = shell
        .job_board_mut(&identity)
        .ok_or_else(|| AppError::Validation("The job board is not the active screen".to_string()))?;
    board.saved.toggle(id);
    Ok(Json(compose(&state, &shell, Some(&identity))))
}

use std::sync::MutexGuard;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::models::{TodoItem, TodoRequest};
use crate::state::AppState;
use crate::store::TodoStore;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, AppError> {
    let todos = lock(&state)?.get_all();
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, AppError> {
    let todo = lock(&state)?
        .get_by_id(id)
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_title(&req)?;
    let todo = lock(&state)?.create(req);
    let location = format!("/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TodoRequest>,
) -> Result<Json<TodoItem>, AppError> {
    require_title(&req)?;
    let todo = lock(&state)?
        .update(id, req)
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if lock(&state)?.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(id))
    }
}

// Validated before the store is consulted, so a rejected request leaves the
// collection and the ID counter untouched.
fn require_title(req: &TodoRequest) -> Result<(), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::TitleRequired);
    }
    Ok(())
}

fn lock(state: &AppState) -> Result<MutexGuard<'_, TodoStore>, AppError> {
    state.store.lock().map_err(|_| AppError::Internal)
}

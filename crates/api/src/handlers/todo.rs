//! Handlers for the `/todos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use taskdeck_core::error::CoreError;
use taskdeck_core::todo::Priority;
use taskdeck_core::types::DbId;
use taskdeck_db::models::todo::{CreateTodo, Todo, TodoFilter, TodoStats, UpdateTodo};
use taskdeck_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListTodosParams;
use crate::state::AppState;

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let new = input.into_new()?;
    let todo = TodoRepo::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> AppResult<Json<Vec<Todo>>> {
    let filter = TodoFilter {
        completed: params.completed,
        priority: params
            .priority
            .as_deref()
            .map(str::parse::<Priority>)
            .transpose()?,
        skip: params.skip,
        limit: params.limit,
    };
    let todos = TodoRepo::list(&state.pool, &filter).await?;
    Ok(Json(todos))
}

/// GET /todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// PUT /todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let patch = input.into_patch()?;
    let todo = TodoRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }))
    }
}

/// GET /todos/stats/summary
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<TodoStats>> {
    let stats = TodoRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}

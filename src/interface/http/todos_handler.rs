use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    application::dto::{CreateTodoRequest, DeleteTodoResponse, TodoResponse, UpdateTodoRequest},
    interface::http::error::{ApiError, ApiJson, ApiResult},
    state::AppState,
};

pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoResponse>>> {
    let todos = state
        .todo_service
        .list_todos()
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    let created = state
        .todo_service
        .create_todo(request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(created))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteTodoResponse>> {
    let deleted = state
        .todo_service
        .delete_todo(&id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(deleted))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoResponse>> {
    let toggled = state
        .todo_service
        .toggle_todo(&id)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(toggled))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    let updated = state
        .todo_service
        .update_todo(&id, request)
        .await
        .map_err(ApiError::from_domain)?;
    Ok(Json(updated))
}

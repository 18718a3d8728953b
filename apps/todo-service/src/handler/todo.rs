//! # Todo ハンドラ
//!
//! フロントエンドから呼ばれる Todo API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/todos` - 一覧（挿入順）
//! - `POST /api/todos` - 作成
//! - `PUT /api/todos/{id}` - 部分更新
//! - `DELETE /api/todos/{id}` - 削除

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use todo_domain::todo::{Todo, TodoPatch};
use todo_shared::MessageResponse;

use crate::{
    error::TodoError,
    extract::{ApiJson, TodoIdPath},
    usecase::TodoUseCaseImpl,
};

/// 更新成功時のメッセージ
pub const TODO_UPDATED_MESSAGE: &str = "Todo updated";
/// 削除成功時のメッセージ
pub const TODO_DELETED_MESSAGE: &str = "Todo deleted";

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    pub id:        i64,
    pub task:      String,
    pub completed: bool,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:        todo.id().as_i64(),
            task:      todo.task().to_string(),
            completed: todo.completed(),
        }
    }
}

/// Todo 作成リクエスト
///
/// `task` の欠落はバリデーションエラーとして扱うため `Option` で受ける。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub task: Option<String>,
}

/// Todo 更新リクエスト
///
/// 省略されたフィールドと `null` はどちらも「変更しない」。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub task:      Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            task:      req.task,
            completed: req.completed,
        }
    }
}

// --- ハンドラ ---

/// GET /api/todos
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/todos
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo
/// - `400 Bad Request`: `task` が無い、空白のみ、または JSON として不正
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    ApiJson(req): ApiJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, TodoError> {
    let todo = state.usecase.create_todo(req.task).await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// PUT /api/todos/{id}
///
/// ボディの検証より先に存在確認を行うため、存在しない ID はボディの内容によらず 404。
///
/// ## レスポンス
///
/// - `200 OK`: `{"message": "Todo updated"}`
/// - `400 Bad Request`: JSON として不正
/// - `404 Not Found`: Todo が見つからない
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    TodoIdPath(id): TodoIdPath,
    body: Result<ApiJson<UpdateTodoRequest>, TodoError>,
) -> Result<impl IntoResponse, TodoError> {
    let todo = state.usecase.find_todo(id).await?;
    let ApiJson(req) = body?;

    state.usecase.update_todo(todo, req.into()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(TODO_UPDATED_MESSAGE)),
    ))
}

/// DELETE /api/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: `{"message": "Todo deleted"}`
/// - `404 Not Found`: Todo が見つからない
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    TodoIdPath(id): TodoIdPath,
) -> Result<impl IntoResponse, TodoError> {
    state.usecase.delete_todo(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(TODO_DELETED_MESSAGE)),
    ))
}

//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `Validation` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `Database` | 500 Internal Server Error |
//!
//! レスポンスボディはいずれも `{"error": "<メッセージ>"}`。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::{
    ErrorResponse,
    event_log::error::{category, kind},
};

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// 入力値の検証失敗
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for TodoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => TodoError::Validation(msg),
            DomainError::NotFound { entity_type, .. } => {
                TodoError::NotFound(format!("{entity_type} not found"))
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            TodoError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            TodoError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            TodoError::Database(e) => {
                tracing::error!(
                    error.category = category::INFRASTRUCTURE,
                    error.kind = kind::DATABASE,
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

//! # リクエスト抽出
//!
//! axum 標準のエクストラクタをラップし、拒否時のレスポンスを
//! `{"error": ...}` 形式に揃える。
//!
//! - [`ApiJson`]: JSON ボディ。パース失敗は 400
//! - [`TodoIdPath`]: パスの Todo ID。整数でなければ 404（そのリソースは存在し得ない）

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use todo_domain::todo::TodoId;

use crate::error::TodoError;

/// Todo が見つからないときのメッセージ
pub const TODO_NOT_FOUND_MESSAGE: &str = "Todo not found";

/// JSON ボディエクストラクタ
///
/// Content-Type の欠落、構文エラー、型不一致はすべて 400 Bad Request になる。
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "JSON ボディを受理できませんでした");
                Err(TodoError::Validation(rejection.body_text()))
            }
        }
    }
}

/// `/api/todos/{id}` の ID エクストラクタ
#[derive(Debug, Clone, Copy)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(TodoId::new(id))),
            Err(rejection) => {
                tracing::debug!(%rejection, "Todo ID として解釈できないパスです");
                Err(TodoError::NotFound(TODO_NOT_FOUND_MESSAGE.to_string()))
            }
        }
    }
}

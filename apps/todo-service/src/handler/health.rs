//! # ヘルスチェックハンドラ
//!
//! Todo Service の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! - `GET /` - 稼働確認用のテキスト
//! - `GET /health` - Liveness（プロセスが応答するか）
//! - `GET /health/ready` - Readiness（データベースに接続できるか）
//!
//! レスポンス型は [`todo_shared::HealthResponse`] / [`todo_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;
use todo_infra::db;
use todo_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

/// `GET /` が返すテキスト
pub const INDEX_MESSAGE: &str = "Todo API is running. Use /api/todos to access the Todo API.";

/// Readiness Check 用の共有状態
pub struct ReadinessState {
    pub pool: SqlitePool,
}

/// GET /
pub async fn index() -> &'static str {
    INDEX_MESSAGE
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check エンドポイント
///
/// データベースに `SELECT 1` を発行し、失敗した場合は 503 を返す。
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let database = match db::check_connection(&state.pool).await {
        Ok(()) => CheckStatus::Ok,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check: database query failed");
            CheckStatus::Error
        }
    };

    let response = ReadinessResponse::from_checks(HashMap::from([(
        "database".to_string(),
        database,
    )]));
    let http_status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (http_status, Json(response))
}

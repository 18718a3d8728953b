//! # ルーター構築
//!
//! ハンドラ、共有状態、ミドルウェアを組み立てて axum の [`Router`] を返す。
//! `main` と統合テストの双方から使う。
//!
//! ## レイヤー構成（外側から）
//!
//! 1. `SetRequestIdLayer`: `x-request-id` が無ければ UUID v7 を発行
//! 2. `TraceLayer`: リクエスト単位のスパン（Request ID を記録）
//! 3. `PropagateRequestIdLayer`: `x-request-id` をレスポンスへ複製
//! 4. `CorsLayer`: 全オリジンを許可

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use sqlx::SqlitePool;
use todo_infra::repository::{SqliteTodoRepository, TodoRepository};
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ReadinessState,
        TodoState,
        create_todo,
        delete_todo,
        health_check,
        index,
        list_todos,
        readiness_check,
        update_todo,
    },
    usecase::TodoUseCaseImpl,
};

/// SQLite プールから依存コンポーネントを組み立て、アプリケーション全体のルーターを返す
pub fn build_app(pool: SqlitePool) -> Router {
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    let todo_repository: Arc<dyn TodoRepository> = Arc::new(SqliteTodoRepository::new(pool));
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });

    build_router(todo_state, readiness_state)
}

/// 共有状態を受け取り、ルーティングとミドルウェアを組み立てる
pub fn build_router(todo_state: Arc<TodoState>, readiness_state: Arc<ReadinessState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(todo_state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors_layer()),
        )
}

/// 別オリジンのフロントエンドから呼べるよう、すべてのオリジン・メソッド・ヘッダーを許可する
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

//! 統合テスト共通ヘルパー
//!
//! インメモリ SQLite にマイグレーションを適用し、本番と同じルーターを組み立てる。

#![allow(dead_code)]

use axum::{Router, body::Body, response::Response};
use http::{Method, Request, header};
use sqlx::SqlitePool;
use todo_infra::db;
use todo_service::app::build_app;

/// マイグレーション済みのインメモリ SQLite プールを作成する
///
/// インメモリ DB は接続ごとに独立するため、接続数を 1 に固定し、
/// 接続が破棄されないようにアイドルタイムアウトと寿命を無効化する。
pub async fn setup_pool() -> SqlitePool {
    let pool = db::pool_options()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("インメモリ DB への接続に失敗");
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗");
    pool
}

/// インメモリ DB を使うアプリケーション全体のルーターを返す
pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = setup_pool().await;
    (build_app(pool.clone()), pool)
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}

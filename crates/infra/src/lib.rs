//! # Todo API インフラ層
//!
//! 永続化ストアとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: SQLite への接続プール管理とマイグレーション
//! - **リポジトリ実装**: Todo の永続化
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - SQLite データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::SqliteTodoRepository};
//!
//! async fn setup() -> Result<(), todo_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://todos.db", 5).await?;
//!     db::run_migrations(&pool).await?;
//!     let repository = SqliteTodoRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::InfraError;

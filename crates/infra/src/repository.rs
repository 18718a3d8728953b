//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **依存性逆転**: 上位層はトレイトにのみ依存し、SQLite 実装は起動時に注入する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod todo_repository;

pub use todo_repository::{SqliteTodoRepository, TodoRepository};

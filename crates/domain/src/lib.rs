//! # Todo API ドメイン層
//!
//! Todo リソースのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{NewTodo, TaskDescription};
//!
//! let task = TaskDescription::new("牛乳を買う").unwrap();
//! let new_todo = NewTodo::new(task);
//! assert!(!new_todo.completed());
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;

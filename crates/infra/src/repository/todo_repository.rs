//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: `insert` は採番済みの [`Todo`] を返す
//! - **一覧は挿入順**: `id` 昇順で返す
//! - **ハードデリート**: 削除した行は残さない

use async_trait::async_trait;
use sqlx::SqlitePool;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番済みの Todo を返す
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError>;

    /// すべての Todo を挿入順に取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo の `task` と `completed` を保存する
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// Todo を削除する
    async fn delete(&self, id: TodoId) -> Result<(), InfraError>;
}

/// SQLite 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `todos` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:        i64,
    task:      String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::from_db(TodoId::new(row.id), row.task, row.completed)
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (task, completed)
            VALUES (?, ?)
            RETURNING id, task, completed
            "#,
        )
        .bind(todo.task().as_str())
        .bind(todo.completed())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, task, completed
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, task, completed
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET task = ?, completed = ?
            WHERE id = ?
            "#,
        )
        .bind(todo.task())
        .bind(todo.completed())
        .bind(todo.id().as_i64())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!("更新対象の Todo が存在しませんでした");
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

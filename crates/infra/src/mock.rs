//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

#[derive(Default)]
struct MockTodoStore {
    todos:   Vec<Todo>,
    last_id: i64,
}

/// インメモリの TodoRepository
///
/// ID は 1 から単調増加で採番し、削除後も再利用しない。
/// `Clone` したインスタンス同士はストアを共有する。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    store: Arc<Mutex<MockTodoStore>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 採番済みの Todo を直接追加する
    pub fn add_todo(&self, todo: Todo) {
        let mut store = self.store.lock().unwrap();
        store.last_id = store.last_id.max(todo.id().as_i64());
        store.todos.push(todo);
    }

    /// 現在保持している Todo のスナップショット
    pub fn todos(&self) -> Vec<Todo> {
        self.store.lock().unwrap().todos.clone()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
        let mut store = self.store.lock().unwrap();
        store.last_id += 1;
        let created = Todo::from_db(
            TodoId::new(store.last_id),
            todo.task().as_str().to_string(),
            todo.completed(),
        );
        store.todos.push(created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.todos())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .todos
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        let mut store = self.store.lock().unwrap();
        if let Some(existing) = store.todos.iter_mut().find(|t| t.id() == todo.id()) {
            *existing = todo.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), InfraError> {
        self.store.lock().unwrap().todos.retain(|t| t.id() != id);
        Ok(())
    }
}

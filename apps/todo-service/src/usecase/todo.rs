//! Todo ユースケース

use std::sync::Arc;

use todo_domain::{
    DomainError,
    todo::{NewTodo, TaskDescription, Todo, TodoId, TodoPatch},
};
use todo_infra::repository::TodoRepository;
use todo_shared::{event_log::event, log_business_event};

use crate::error::TodoError;

/// Todo ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// Todo 一覧を挿入順で取得する
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.todo_repository.find_all().await?)
    }

    /// Todo を作成する
    ///
    /// `task` が無い、または空白のみの場合はバリデーションエラー。
    /// 検証はトリム後の値で行うが、保存するのは入力値そのまま。
    pub async fn create_todo(&self, task: Option<String>) -> Result<Todo, TodoError> {
        let task = match TaskDescription::new(task.unwrap_or_default()) {
            Ok(task) => task,
            Err(e) => {
                log_business_event!(
                    event.category = event::category::TODO,
                    event.action = event::action::TODO_CREATED,
                    event.entity_type = event::entity_type::TODO,
                    event.result = event::result::FAILURE,
                    reason = %e,
                    "Todo 作成失敗: タスクが空"
                );
                return Err(e.into());
            }
        };

        let todo = self.todo_repository.insert(&NewTodo::new(task)).await?;

        log_business_event!(
            event.category = event::category::TODO,
            event.action = event::action::TODO_CREATED,
            event.entity_type = event::entity_type::TODO,
            event.entity_id = %todo.id(),
            event.result = event::result::SUCCESS,
            "Todo 作成"
        );

        Ok(todo)
    }

    /// ID で Todo を取得する。存在しなければ NotFound
    pub async fn find_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        let todo = self
            .todo_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Todo",
                id:          id.to_string(),
            })?;
        Ok(todo)
    }

    /// 取得済みの Todo を部分更新する
    ///
    /// パッチに含まれるフィールドだけを変更する。`task` の空チェックは行わない。
    pub async fn update_todo(&self, todo: Todo, patch: TodoPatch) -> Result<Todo, TodoError> {
        let id = todo.id();

        if patch.is_empty() {
            tracing::debug!(%id, "変更対象のフィールドがないため更新をスキップします");
            return Ok(todo);
        }

        let updated = todo.apply(patch);
        self.todo_repository.update(&updated).await?;

        log_business_event!(
            event.category = event::category::TODO,
            event.action = event::action::TODO_UPDATED,
            event.entity_type = event::entity_type::TODO,
            event.entity_id = %id,
            event.result = event::result::SUCCESS,
            "Todo 更新"
        );

        Ok(updated)
    }

    /// Todo を削除する
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        let todo = self.find_todo(id).await?;

        self.todo_repository.delete(todo.id()).await?;

        log_business_event!(
            event.category = event::category::TODO,
            event.action = event::action::TODO_DELETED,
            event.entity_type = event::entity_type::TODO,
            event.entity_id = %id,
            event.result = event::result::SUCCESS,
            "Todo 削除"
        );

        Ok(())
    }
}

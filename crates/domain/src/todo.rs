//! # Todo
//!
//! タスク記述と完了フラグを持つ Todo エンティティを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`TodoId`] | Todo ID | 永続化層が採番する整数。再利用されない |
//! | [`TaskDescription`] | タスク記述 | 作成時に検証されるタスク本文 |
//! | [`NewTodo`] | 未永続化の Todo | ID 採番前の作成要求 |
//! | [`TodoPatch`] | 部分更新 | 指定されたフィールドだけを変更する更新要求 |
//! | [`Todo`] | Todo | 永続化済みのエンティティ |
//!
//! ## 不変条件
//!
//! - 作成時の `task` は前後の空白を除いて空でない
//! - `task` は入力値そのまま保存される（トリムは検証にのみ使う）
//! - 作成時の `completed` は常に `false`
//! - 更新時の `task` は検証しない（空文字への更新も受け付ける）

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 空タスクを拒否するときのメッセージ
pub const TASK_REQUIRED_MESSAGE: &str = "Task is required and cannot be empty";

/// Todo ID
///
/// 永続化層が採番する。一度払い出した値は削除後も再利用されない。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// タスク記述（値オブジェクト）
///
/// # バリデーション
///
/// - 前後の空白を除いて空でない
/// - 長さの上限はない
///
/// 検証に通った値は空白を含めて入力そのままで保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(TASK_REQUIRED_MESSAGE.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 未永続化の Todo
///
/// ID は永続化層で採番されるため持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    task: TaskDescription,
}

impl NewTodo {
    pub fn new(task: TaskDescription) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &TaskDescription {
        &self.task
    }

    /// 作成直後は常に未完了
    pub fn completed(&self) -> bool {
        false
    }
}

/// 部分更新の内容
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub task:      Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// 変更対象のフィールドが 1 つもないか
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.completed.is_none()
    }
}

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:        TodoId,
    task:      String,
    completed: bool,
}

impl Todo {
    /// 永続化済みのデータから復元する
    pub fn from_db(id: TodoId, task: String, completed: bool) -> Self {
        Self {
            id,
            task,
            completed,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// 部分更新を適用した新しい状態を返す
    ///
    /// `task` は空文字でもそのまま適用する。
    pub fn apply(self, patch: TodoPatch) -> Self {
        Self {
            id:        self.id,
            task:      patch.task.unwrap_or(self.task),
            completed: patch.completed.unwrap_or(self.completed),
        }
    }
}

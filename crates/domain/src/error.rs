//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::DomainError;
//!
//! fn find_todo(id: i64) -> Result<(), DomainError> {
//!     Err(DomainError::NotFound {
//!         entity_type: "Todo",
//!         id:          id.to_string(),
//!     })
//! }
//!
//! assert!(find_todo(1).is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 保持するメッセージはそのままクライアントに返される。
    #[error("{0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Todo" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

//! # メッセージレスポンス
//!
//! 更新・削除のようにリソース本体を返さない操作の成功レスポンス。

use serde::{Deserialize, Serialize};

/// `{"message": "<メッセージ>"}` 形式の成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
   pub message: String,
}

impl MessageResponse {
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         message: message.into(),
      }
   }
}

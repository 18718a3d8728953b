//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - ワイヤ形式は `{"error": "<メッセージ>"}` の 1 フィールドのみ（フロントエンドとの互換性を保つ）
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - ステータスコードは HTTP レスポンス側で表現し、ボディには含めない

use serde::{Deserialize, Serialize};

/// 500 応答で返す固定メッセージ
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error: String,
}

impl ErrorResponse {
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error: error.into(),
      }
   }

   /// 500 Internal Server Error 用
   ///
   /// メッセージは固定値（内部情報を漏らさないため）。
   pub fn internal_error() -> Self {
      Self::new(INTERNAL_ERROR_MESSAGE)
   }
}

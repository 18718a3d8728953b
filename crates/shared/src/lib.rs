//! # Todo API 共有ユーティリティ
//!
//! サービス層から使われる共通のレスポンス型とロギング基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は各サービスの責務）
//! - トレーシング初期化など重い依存は `observability` feature の裏に置く

pub mod error_response;
pub mod event_log;
pub mod health;
pub mod message_response;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use message_response::MessageResponse;

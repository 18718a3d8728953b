//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` でログを絞り込めるよう、フィールドの命名規約とヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。
//!
//! フィールド名はドット記法（`event.category`、`error.kind`）。JSON 出力ではフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: [`event::category`] の定数
/// - `event.action`: [`event::action`] の定数
/// - `event.result`: [`event::result`] の定数
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: [`event::entity_type`] の定数
/// - `event.entity_id`: エンティティ ID
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    pub mod category {
        pub const TODO: &str = "todo";
    }

    pub mod action {
        pub const TODO_CREATED: &str = "todo.created";
        pub const TODO_UPDATED: &str = "todo.updated";
        pub const TODO_DELETED: &str = "todo.deleted";
    }

    pub mod entity_type {
        pub const TODO: &str = "todo";
    }

    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    pub mod category {
        /// インフラストラクチャ（DB）
        pub const INFRASTRUCTURE: &str = "infrastructure";
    }

    pub mod kind {
        pub const DATABASE: &str = "database";
    }
}

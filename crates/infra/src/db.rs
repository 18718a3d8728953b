//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成、マイグレーション、疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 接続を再利用し、リクエストごとの接続確立を避ける
//! - **ファイル自動作成**: 初回起動時にデータベースファイルが無ければ作成する
//! - **埋め込みマイグレーション**: `migrations/` 配下の SQL をバイナリに埋め込む
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::db;
//!
//! async fn example() -> Result<(), todo_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://todos.db", 5).await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
//!         .fetch_one(&pool)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// 接続取得のタイムアウト
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// 共通設定を適用した `SqlitePoolOptions` を返す
///
/// テストでは `max_connections(1)` と組み合わせて使用する
/// （インメモリ DB は接続ごとに別のデータベースになるため）。
pub fn pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new().acquire_timeout(ACQUIRE_TIMEOUT)
}

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL（例: `sqlite://todos.db`、`sqlite::memory:`）
/// * `max_connections` - 最大接続数
///
/// ファイルが存在しない場合は新規作成する。
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, InfraError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = pool_options()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// データベースへの疎通を確認する
///
/// Readiness Check で使用する。
#[tracing::instrument(skip_all, level = "debug")]
pub async fn check_connection(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

//! # Todo Service サーバー
//!
//! Todo リストを管理する HTTP/JSON API サーバー。
//! 別オリジンで配信されるフロントエンドから直接呼ばれる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite://todos.db`） |
//! | `DATABASE_MAX_CONNECTIONS` | No | 接続プールの最大接続数（デフォルト: `5`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todo-service
//!
//! # 本番環境
//! TODO_PORT=8080 DATABASE_URL=sqlite:///var/lib/todo/todos.db LOG_FORMAT=json \
//!     cargo run -p todo-service --release
//! ```

use todo_infra::db;
use todo_service::{app::build_app, config::TodoConfig};
use todo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todo-service");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = TodoConfig::from_env()?;
    let addr = config.socket_addr()?;

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool).await?;
    tracing::info!("マイグレーションを適用しました");

    let app = build_app(pool);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

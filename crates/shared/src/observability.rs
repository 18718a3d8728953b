//! # Observability 基盤
//!
//! Todo Service のログ出力とリクエスト追跡を担う。
//!
//! - [`init_tracing`]: `RUST_LOG` / `LOG_FORMAT` に従って subscriber を登録
//! - [`make_request_span`]: リクエストごとの `request` スパン（method, uri, request_id）
//! - [`MakeRequestUuidV7`]: `x-request-id` が無いリクエストへの ID 発行
//!
//! 1 リクエスト中のログはすべて `request` スパン配下に出るため、
//! `request_id` で 1 件の API 呼び出しを追える。

/// ログ出力形式
///
/// コンテナで動かすときは `LOG_FORMAT=json` を指定し、ログ基盤に 1 行 1 JSON で渡す。
/// ローカル開発では未指定のままでよい。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 JSON。`request_id` などのスパンフィールドも含む
    Json,
    /// 色付きの複数行出力
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 大文字小文字は区別する。`json` / `pretty` 以外は subscriber 登録前なので
    /// tracing ではなく stderr に警告し、[`Pretty`](LogFormat::Pretty) を使う。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|val| Self::parse(&val))
            .unwrap_or_default()
    }
}

/// [`init_tracing`] に渡す設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// 起動時の `app` スパンと初期化ログに載せるサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 出力形式だけを `LOG_FORMAT` から決める（フィルタは `RUST_LOG` が直接効く）
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,todo=debug";

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は [`DEFAULT_LOG_FILTER`] を使う。
///
/// `ErrorLayer` を登録するため、インフラ層のエラーが保持する `SpanTrace` には
/// エラー発生時点のスパン階層が記録される。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::debug!(service = %config.service_name, format = ?config.log_format, "トレーシングを初期化しました");
}

/// HTTP リクエスト用のスパンを生成する
///
/// `TraceLayer::make_span_with` に渡して使う。`SetRequestIdLayer` より内側に
/// 配置すること（外側だと `x-request-id` がまだ付与されていない）。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Request ID のヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v7 で Request ID を発行する [`MakeRequestId`](tower_http::request_id::MakeRequestId) 実装
///
/// v7 は時刻順にソート可能なため、ログを ID 順に並べると到着順になる。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

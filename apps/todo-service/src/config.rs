//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。
//! すべての変数にデフォルト値があり、未設定でも起動できる。

use std::{env, net::SocketAddr, str::FromStr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値のパースに失敗した
    #[error("{name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:                     String,
    /// ポート番号
    pub port:                     u16,
    /// データベース接続 URL
    pub database_url:             String,
    /// 接続プールの最大接続数
    pub database_max_connections: u32,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の変数ソースから設定を読み込む
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host:                     lookup("TODO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port:                     parse_or("TODO_PORT", lookup("TODO_PORT"), DEFAULT_PORT)?,
            database_url:             lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }

    /// バインドするソケットアドレス
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = format!("{}:{}", self.host, self.port);
        value.parse().map_err(|_| ConfigError::InvalidValue {
            name: "TODO_HOST",
            value,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

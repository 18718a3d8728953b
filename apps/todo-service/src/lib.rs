//! # Todo Service ライブラリ
//!
//! Todo Service のルーター、ユースケース、ハンドラを公開する。
//! 統合テストからルーター全体を組み立てられるようにするため、バイナリと分離している。

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;

//! CRB Tool
//!
//! DCCアプリケーションに組み込むクイックアクション・パネルのコア。
//! - registry: スロットとJSONドキュメントの同期
//! - dispatcher: 拡張子と実行モードから実行／インポートを決めてホストに委譲
//! - host: ホスト側の協調者（スクリプト実行・ピッカー・通知）

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod host;
pub mod registry;
pub mod scanner;

pub use crb_tool_common as common;

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid slot: {kind} {index} (valid range 1..={capacity})")]
    InvalidSlot {
        kind: &'static str,
        index: usize,
        capacity: usize,
    },

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

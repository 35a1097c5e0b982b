use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrbError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ツールがアクティベートされていません（プロファイルディレクトリなし）: {0}")]
    NotActivated(String),

    #[error("保存データが破損しています: {0}")]
    CorruptState(String),

    #[error("パスが見つかりません: {0}")]
    PathUnavailable(String),

    #[error("スクリプト実行エラー: {0}")]
    ScriptExecution(String),

    #[error("インポートエラー: {0}")]
    HostImport(String),

    #[error("ホスト機能が設定されていません: {0}")]
    HostUnavailable(String),

    #[error("ディレクトリ {index} にアイテムがありません: {item}")]
    UnknownItem { index: usize, item: String },

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] crb_tool_common::Error),
}

impl CrbError {
    /// バッチを中断すべきエラーか（NotActivated / CorruptState）
    pub fn is_fatal(&self) -> bool {
        matches!(self, CrbError::NotActivated(_) | CrbError::CorruptState(_))
    }
}

pub type Result<T> = std::result::Result<T, CrbError>;

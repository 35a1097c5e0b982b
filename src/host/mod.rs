//! ホストアプリケーション側の協調者
//!
//! - ScriptHost: スクリプト実行・MEL評価・シーンのインポート
//! - FilePicker: ファイル／ディレクトリ選択
//! - NoticeSink: 通知表示

mod console;
mod process;

pub use console::{ConsoleNotices, ConsolePicker};
pub use process::{parse_outcome, ProcessHost};

use crate::dispatcher::ImportRequest;
use crate::error::Result;
use crb_tool_common::{Notice, ScriptOutcome};
use std::path::{Path, PathBuf};

pub trait ScriptHost {
    /// .py を実行して構造化結果を返す
    fn execute_script(&mut self, path: &Path) -> Result<ScriptOutcome>;

    /// MELテキストを評価
    fn eval_expression(&mut self, text: &str) -> Result<()>;

    /// シーンをインポート（リファレンス含む）
    fn import_asset(&mut self, request: &ImportRequest) -> Result<()>;
}

pub trait FilePicker {
    /// キャンセル時は None
    fn pick_file(&mut self, title: &str, extensions: &[&str]) -> Result<Option<PathBuf>>;

    /// キャンセル時は None
    fn pick_directory(&mut self, title: &str) -> Result<Option<PathBuf>>;
}

pub trait NoticeSink {
    fn show_notice(&mut self, notice: &Notice);
}

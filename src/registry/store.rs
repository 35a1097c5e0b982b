//! ドキュメントファイルの読み書き
//!
//! 書き込みは同じディレクトリの一時ファイルに書いてからリネームする。

use crate::config::Config;
use crate::error::{CrbError, Result};
use crb_tool_common::{SlotDocument, SlotKind};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// ドキュメントを読み込み（不正なら CorruptState）
pub(crate) fn read_document(path: &Path, kind: SlotKind) -> Result<SlotDocument> {
    if !path.is_file() {
        return Err(CrbError::CorruptState(format!(
            "{} がありません",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    SlotDocument::from_json(kind, &content)
        .map_err(|e| CrbError::CorruptState(format!("{}: {}", path.display(), e)))
}

/// ドキュメント全体を書き直す
pub(crate) fn write_document(path: &Path, document: &SlotDocument) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| CrbError::Config(format!("親ディレクトリがありません: {}", path.display())))?;

    let json = document.to_json()?;
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| CrbError::Io(e.error))?;

    tracing::debug!(path = %path.display(), kind = %document.kind(), "document written");
    Ok(())
}

/// テンプレートを読み込み（設定がなければ全スロット空）
pub(crate) fn load_template(config: &Config, kind: SlotKind) -> Result<SlotDocument> {
    match config.template_path(kind) {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            SlotDocument::from_json(kind, &content).map_err(|e| {
                CrbError::Config(format!("テンプレートが不正: {}: {}", path.display(), e))
            })
        }
        None => Ok(SlotDocument::empty(kind)),
    }
}

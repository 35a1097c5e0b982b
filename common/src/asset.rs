//! 拡張子によるアセット種別の判定

use crate::naming;
use serde::{Deserialize, Serialize};

/// ディレクトリ一覧の対象拡張子
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ma", "py", "mel", "mb"];

/// アクションのファイルピッカーで選べる拡張子
pub const SCRIPT_EXTENSIONS: &[&str] = &["mel", "py"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// .py
    PythonScript,
    /// .mel
    MelScript,
    /// .ma
    AsciiScene,
    /// .mb
    BinaryScene,
    Other,
}

impl AssetKind {
    pub fn from_path(path: &str) -> Self {
        match naming::extension(path) {
            Some("py") => AssetKind::PythonScript,
            Some("mel") => AssetKind::MelScript,
            Some("ma") => AssetKind::AsciiScene,
            Some("mb") => AssetKind::BinaryScene,
            _ => AssetKind::Other,
        }
    }

    pub fn is_scene(&self) -> bool {
        matches!(self, AssetKind::AsciiScene | AssetKind::BinaryScene)
    }

    pub fn is_script(&self) -> bool {
        matches!(self, AssetKind::PythonScript | AssetKind::MelScript)
    }

    /// ホストのインポートに渡すファイルタイプ名
    pub fn scene_type(&self) -> Option<&'static str> {
        match self {
            AssetKind::AsciiScene => Some("mayaAscii"),
            AssetKind::BinaryScene => Some("mayaBinary"),
            _ => None,
        }
    }
}

/// ファイル名が拡張子リストのいずれかで終わるか
pub fn has_extension(name: &str, extensions: &[String]) -> bool {
    naming::extension(name)
        .map(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
        .unwrap_or(false)
}

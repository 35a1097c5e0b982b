//! スロットの型定義
//!
//! - SlotKind: アクション(6枠) / ディレクトリ(3枠)
//! - SlotView: パネルに表示する1スロット分の情報
//! - DirectorySlot: ディレクトリスロットと派生アイテム一覧

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// アクションスロット数
pub const ACTION_CAPACITY: usize = 6;
/// ディレクトリスロット数
pub const DIRECTORY_CAPACITY: usize = 3;

/// スロット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Action,
    Directory,
}

impl SlotKind {
    pub const ALL: [SlotKind; 2] = [SlotKind::Action, SlotKind::Directory];

    pub fn capacity(&self) -> usize {
        match self {
            SlotKind::Action => ACTION_CAPACITY,
            SlotKind::Directory => DIRECTORY_CAPACITY,
        }
    }

    /// ドキュメントのキー接頭辞
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Action => "Action",
            SlotKind::Directory => "Directory",
        }
    }

    /// ドキュメントキー（例: "Action 1"）
    pub fn key(&self, index: usize) -> String {
        format!("{} {}", self.label(), index)
    }

    /// 1始まりのインデックスを検証
    pub fn check_index(&self, index: usize) -> Result<()> {
        if (1..=self.capacity()).contains(&index) {
            Ok(())
        } else {
            Err(Error::InvalidSlot {
                kind: self.label(),
                index,
                capacity: self.capacity(),
            })
        }
    }

    /// 全インデックス（1..=N）
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.capacity()
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// パネル表示用のスロット情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub kind: SlotKind,
    pub index: usize,
    /// 未割り当てならNone
    pub path: Option<String>,
    /// ラベル表示名
    pub display_name: String,
    /// ツールチップ
    pub tooltip: Option<String>,
}

impl SlotView {
    pub fn is_assigned(&self) -> bool {
        self.path.is_some()
    }
}

/// ディレクトリスロット
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySlot {
    pub index: usize,
    pub path: Option<String>,
    /// 対象拡張子のファイル名（列挙順）
    pub items: Vec<String>,
    /// 割り当て済みのディレクトリが見つからなければ false
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(SlotKind::Action.capacity(), 6);
        assert_eq!(SlotKind::Directory.capacity(), 3);
    }

    #[test]
    fn test_key() {
        assert_eq!(SlotKind::Action.key(1), "Action 1");
        assert_eq!(SlotKind::Directory.key(3), "Directory 3");
    }

    #[test]
    fn test_check_index() {
        assert!(SlotKind::Action.check_index(1).is_ok());
        assert!(SlotKind::Action.check_index(6).is_ok());
        assert!(SlotKind::Action.check_index(0).is_err());
        assert!(SlotKind::Action.check_index(7).is_err());
        assert!(SlotKind::Directory.check_index(3).is_ok());
        assert!(matches!(
            SlotKind::Directory.check_index(4),
            Err(Error::InvalidSlot { capacity: 3, .. })
        ));
    }

    #[test]
    fn test_indices() {
        let indices: Vec<usize> = SlotKind::Directory.indices().collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}

//! バッチ実行の結果

use crb_tool_common::SlotKind;

/// スロット1件の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    /// .py を実行した
    Executed { message: Option<String> },
    /// .mel を評価した
    Evaluated,
    /// シーンをインポートした
    Imported { namespace: String, as_reference: bool },
    /// 実行を拒否した（シーンファイルの実行など）
    Refused(String),
    /// 対象外のため何もしなかった
    Skipped(String),
    /// 実行・インポートに失敗した
    Failed(String),
    /// ディレクトリを割り当てた
    Assigned(String),
    /// ピッカーがキャンセルされた
    Cancelled,
    /// ディレクトリをリセットした
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub kind: SlotKind,
    pub index: usize,
    pub path: Option<String>,
    pub outcome: SlotOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// インデックス順
    pub slots: Vec<SlotReport>,
    /// ディレクトリのアイテム一覧を再計算したか
    pub items_refreshed: bool,
}

impl BatchReport {
    pub fn push(&mut self, kind: SlotKind, index: usize, path: Option<String>, outcome: SlotOutcome) {
        self.slots.push(SlotReport {
            kind,
            index,
            path,
            outcome,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SlotReport> {
        self.slots
            .iter()
            .filter(|s| matches!(s.outcome, SlotOutcome::Failed(_)))
    }

    pub fn outcome(&self, index: usize) -> Option<&SlotOutcome> {
        self.slots
            .iter()
            .find(|s| s.index == index)
            .map(|s| &s.outcome)
    }
}

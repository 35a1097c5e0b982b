//! パネルのウィジェット状態（チェックボックス・選択アイテム・モード）
//!
//! 永続化はしない。アクティベート／リセットで有効フラグは全てクリアされる。

use crate::error::Result;
use crate::mode::ExecutionMode;
use crate::slot::{SlotKind, ACTION_CAPACITY, DIRECTORY_CAPACITY};
use serde::{Deserialize, Serialize};

/// スロットの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    Unassigned,
    Assigned,
    EnabledAndAssigned,
}

impl SlotState {
    pub fn of(assigned: bool, enabled: bool) -> Self {
        match (assigned, enabled) {
            (false, _) => SlotState::Unassigned,
            (true, false) => SlotState::Assigned,
            (true, true) => SlotState::EnabledAndAssigned,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    action_enabled: [bool; ACTION_CAPACITY],
    directory_enabled: [bool; DIRECTORY_CAPACITY],
    selected_items: [Option<String>; DIRECTORY_CAPACITY],
    mode: ExecutionMode,
}

impl PanelState {
    fn flags(&self, kind: SlotKind) -> &[bool] {
        match kind {
            SlotKind::Action => &self.action_enabled,
            SlotKind::Directory => &self.directory_enabled,
        }
    }

    fn flags_mut(&mut self, kind: SlotKind) -> &mut [bool] {
        match kind {
            SlotKind::Action => &mut self.action_enabled,
            SlotKind::Directory => &mut self.directory_enabled,
        }
    }

    pub fn is_enabled(&self, kind: SlotKind, index: usize) -> Result<bool> {
        kind.check_index(index)?;
        Ok(self.flags(kind)[index - 1])
    }

    pub fn set_enabled(&mut self, kind: SlotKind, index: usize, enabled: bool) -> Result<()> {
        kind.check_index(index)?;
        self.flags_mut(kind)[index - 1] = enabled;
        Ok(())
    }

    /// チェックボックスを反転し、新しい状態を返す
    pub fn toggle(&mut self, kind: SlotKind, index: usize) -> Result<bool> {
        kind.check_index(index)?;
        let flag = &mut self.flags_mut(kind)[index - 1];
        *flag = !*flag;
        Ok(*flag)
    }

    /// 有効なスロットのインデックス（昇順）
    pub fn enabled_indices(&self, kind: SlotKind) -> Vec<usize> {
        self.flags(kind)
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// 全スロットの有効フラグをクリア
    pub fn reset_enabled(&mut self) {
        self.action_enabled = [false; ACTION_CAPACITY];
        self.directory_enabled = [false; DIRECTORY_CAPACITY];
    }

    pub fn state(&self, kind: SlotKind, index: usize, assigned: bool) -> Result<SlotState> {
        Ok(SlotState::of(assigned, self.is_enabled(kind, index)?))
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.mode = mode;
    }

    pub fn selected_item(&self, index: usize) -> Result<Option<&str>> {
        SlotKind::Directory.check_index(index)?;
        Ok(self.selected_items[index - 1].as_deref())
    }

    pub fn set_selected_item(&mut self, index: usize, item: Option<String>) -> Result<()> {
        SlotKind::Directory.check_index(index)?;
        self.selected_items[index - 1] = item;
        Ok(())
    }
}

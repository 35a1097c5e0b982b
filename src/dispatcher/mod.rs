//! ディスパッチャ
//!
//! スロットのパスと実行モードから、スクリプト実行・インポート・リファレンス・
//! ディレクトリ追加／リセットのどれを行うかを決めてホストに委譲する。
//!
//! - 実行／インポートの失敗は通知に変換し、バッチは次のスロットへ進む
//! - NotActivated / CorruptState は通知を出してコマンド全体を中断する
//! - スロットはインデックス順に1件ずつ完了させる

mod import;
mod report;

pub use import::ImportRequest;
pub use report::{BatchReport, SlotOutcome, SlotReport};

use crate::error::{CrbError, Result};
use crate::host::{FilePicker, NoticeSink, ScriptHost};
use crate::registry::{Activation, SlotRegistry};
use crb_tool_common::{
    AssetKind, ExecutionMode, Notice, PanelState, ScriptStatus, SlotKind, SlotState,
    DIRECTORY_CAPACITY, SCRIPT_EXTENSIONS,
};
use std::path::Path;

pub struct Dispatcher<H, P, N> {
    registry: SlotRegistry,
    host: H,
    picker: P,
    notices: N,
    panel: PanelState,
    /// ディレクトリごとのアイテム一覧（コンボボックスの中身）
    items: [Vec<String>; DIRECTORY_CAPACITY],
}

impl<H: ScriptHost, P: FilePicker, N: NoticeSink> Dispatcher<H, P, N> {
    /// アイテム一覧は空で始まる。アクティベート済みなら refresh_directory_items() を呼ぶこと
    pub fn new(registry: SlotRegistry, host: H, picker: P, notices: N) -> Self {
        Self {
            registry,
            host,
            picker,
            notices,
            panel: PanelState::default(),
            items: Default::default(),
        }
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn notices(&self) -> &N {
        &self.notices
    }

    pub fn directory_items(&self, index: usize) -> Result<&[String]> {
        SlotKind::Directory.check_index(index)?;
        Ok(&self.items[index - 1])
    }

    /// スロットのパスを読む
    ///
    /// 中断すべきエラーは通知して Err、それ以外はスロットの失敗として Ok(Err(..))。
    fn read_slot(
        &mut self,
        kind: SlotKind,
        index: usize,
    ) -> Result<std::result::Result<Option<String>, SlotOutcome>> {
        match self.registry.slot_path(kind, index) {
            Ok(path) => Ok(Ok(path)),
            Err(e) if e.is_fatal() => self.surface(Err(e)),
            Err(e) => Ok(Err(self.fail(e))),
        }
    }

    /// 失敗なら通知を出してからエラーを返す
    fn surface<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            tracing::error!(error = %e, "command aborted");
            self.notices.show_notice(&Notice::error(e.to_string()));
        }
        result
    }

    /// 委譲の失敗を通知に変換
    fn fail(&mut self, error: CrbError) -> SlotOutcome {
        tracing::warn!(error = %error, "slot failed");
        let message = error.to_string();
        self.notices.show_notice(&Notice::error(message.clone()));
        SlotOutcome::Failed(message)
    }

    fn skip(&mut self, reason: String) -> SlotOutcome {
        tracing::warn!(%reason, "slot skipped");
        self.notices.show_notice(&Notice::warning(reason.clone()));
        SlotOutcome::Skipped(reason)
    }

    // ------------------------------------------------------------------
    // パネル操作
    // ------------------------------------------------------------------

    pub fn toggle_action(&mut self, index: usize) -> Result<bool> {
        Ok(self.panel.toggle(SlotKind::Action, index)?)
    }

    pub fn toggle_directory(&mut self, index: usize) -> Result<bool> {
        Ok(self.panel.toggle(SlotKind::Directory, index)?)
    }

    pub fn set_enabled(&mut self, kind: SlotKind, index: usize, enabled: bool) -> Result<()> {
        Ok(self.panel.set_enabled(kind, index, enabled)?)
    }

    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.panel.set_mode(mode);
    }

    /// ディレクトリの選択アイテムを変更（現在の一覧にあるもののみ）
    pub fn select_item(&mut self, index: usize, item: &str) -> Result<()> {
        if !self.directory_items(index)?.iter().any(|i| i == item) {
            return Err(CrbError::UnknownItem {
                index,
                item: item.to_string(),
            });
        }
        Ok(self.panel.set_selected_item(index, Some(item.to_string()))?)
    }

    /// アクションスロットの表示状態
    pub fn action_state(&self, index: usize) -> Result<SlotState> {
        let assigned = self.registry.slot_path(SlotKind::Action, index)?.is_some();
        Ok(self.panel.state(SlotKind::Action, index, assigned)?)
    }

    /// ディレクトリのアイテム一覧を再計算
    ///
    /// 選択アイテムは一覧に残っていれば維持、なければ先頭にする。
    pub fn refresh_directory_items(&mut self) -> Result<()> {
        for index in SlotKind::Directory.indices() {
            let items = match self.registry.list_directory_items(index) {
                Ok(items) => items,
                Err(CrbError::PathUnavailable(path)) => {
                    let notice = Notice::warning(format!(
                        "Directory {} が見つかりません: {}",
                        index, path
                    ));
                    self.notices.show_notice(&notice);
                    Vec::new()
                }
                Err(e) => return self.surface(Err(e)),
            };

            let current = self.panel.selected_item(index)?.map(str::to_string);
            let selected = match current {
                Some(item) if items.contains(&item) => Some(item),
                _ => items.first().cloned(),
            };
            self.panel.set_selected_item(index, selected)?;
            self.items[index - 1] = items;
        }

        tracing::debug!("directory items refreshed");
        Ok(())
    }

    fn clear_directory_items(&mut self) -> Result<()> {
        for index in SlotKind::Directory.indices() {
            self.items[index - 1].clear();
            self.panel.set_selected_item(index, None)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // プロファイル
    // ------------------------------------------------------------------

    /// アクティベート／ディアクティベート。全スロットの有効フラグはクリアされる
    pub fn activate(&mut self) -> Result<Activation> {
        let result = self.registry.activate();
        let activation = self.surface(result)?;

        self.panel.reset_enabled();
        match activation {
            Activation::Created => self.refresh_directory_items()?,
            Activation::Removed => self.clear_directory_items()?,
        }

        Ok(activation)
    }

    /// 両ドキュメントをテンプレートに戻し、アクションのチェックを外す
    pub fn reset(&mut self) -> Result<()> {
        for kind in SlotKind::ALL {
            let result = self.registry.reset_all(kind);
            self.surface(result)?;
        }

        for index in SlotKind::Action.indices() {
            self.panel.set_enabled(SlotKind::Action, index, false)?;
        }
        self.refresh_directory_items()
    }

    // ------------------------------------------------------------------
    // アクションスロット
    // ------------------------------------------------------------------

    /// ファイルピッカーでアクションスロットにスクリプトを割り当てる
    ///
    /// キャンセル時は Ok(None)。
    pub fn assign_action(&mut self, index: usize) -> Result<Option<String>> {
        SlotKind::Action.check_index(index)?;

        let picked = self
            .picker
            .pick_file(&format!("Get Path File: Action {}", index), SCRIPT_EXTENSIONS);
        match self.surface(picked)? {
            Some(path) => self.assign_action_path(index, &path).map(Some),
            None => Ok(None),
        }
    }

    /// パスを検証してアクションスロットに割り当てる
    pub fn assign_action_path(&mut self, index: usize, path: &Path) -> Result<String> {
        if !path.is_file() {
            let error = CrbError::PathUnavailable(path.display().to_string());
            return self.surface(Err(error));
        }

        let normalized = path.to_string_lossy().replace('\\', "/");
        let result = self
            .registry
            .set_slot_path(SlotKind::Action, index, &normalized);
        self.surface(result)?;

        Ok(normalized)
    }

    /// アクションスロットを未割り当てに戻す
    pub fn clear_action(&mut self, index: usize) -> Result<()> {
        let result = self.registry.clear_slot(SlotKind::Action, index);
        self.surface(result)?;
        Ok(self.panel.set_enabled(SlotKind::Action, index, false)?)
    }

    /// 有効なアクションスロットを順に実行
    ///
    /// .py は実行、.mel はホストで評価。それ以外の拡張子は実行せず警告する。
    pub fn run_actions(&mut self) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for index in self.panel.enabled_indices(SlotKind::Action) {
            // スロットごとにドキュメントを読み直す
            let path = match self.read_slot(SlotKind::Action, index)? {
                Ok(Some(path)) => path,
                Ok(None) => continue,
                Err(outcome) => {
                    report.push(SlotKind::Action, index, None, outcome);
                    continue;
                }
            };

            tracing::info!(slot = index, %path, "running action");
            let file = Path::new(&path);
            let outcome = match AssetKind::from_path(&path) {
                AssetKind::PythonScript => self.execute(file),
                AssetKind::MelScript => self.evaluate(file),
                _ => self.skip(format!("対応していない拡張子のため実行しません: {}", path)),
            };

            report.push(SlotKind::Action, index, Some(path), outcome);
        }

        Ok(report)
    }

    // ------------------------------------------------------------------
    // ディレクトリスロット
    // ------------------------------------------------------------------

    /// 有効なディレクトリスロットに現在のモードを適用
    pub fn run_directories(&mut self) -> Result<BatchReport> {
        let mode = self.panel.mode();
        let mut report = BatchReport::default();

        for index in self.panel.enabled_indices(SlotKind::Directory) {
            tracing::info!(slot = index, %mode, "running directory");

            let (path, outcome) = match mode {
                ExecutionMode::AddDirectory => match self.add_directory(index)? {
                    SlotOutcome::Assigned(dir) => {
                        report.items_refreshed = true;
                        (Some(dir.clone()), SlotOutcome::Assigned(dir))
                    }
                    outcome => (None, outcome),
                },
                ExecutionMode::ResetDirectories => {
                    let result = self.registry.reset_all(SlotKind::Directory);
                    self.surface(result)?;
                    self.refresh_directory_items()?;
                    report.items_refreshed = true;
                    (None, SlotOutcome::Reset)
                }
                _ => {
                    let dir = match self.read_slot(SlotKind::Directory, index)? {
                        Ok(Some(dir)) => dir,
                        Ok(None) => continue,
                        Err(outcome) => {
                            report.push(SlotKind::Directory, index, None, outcome);
                            continue;
                        }
                    };

                    let selected = self.panel.selected_item(index)?.map(str::to_string);
                    match selected {
                        Some(item) => {
                            let target = Path::new(&dir).join(&item);
                            let outcome = self.run_directory_item(mode, &target);
                            (Some(target.to_string_lossy().replace('\\', "/")), outcome)
                        }
                        None => {
                            let outcome = self.skip(format!(
                                "Directory {} のアイテムが選択されていません",
                                index
                            ));
                            (Some(dir), outcome)
                        }
                    }
                }
            };

            report.push(SlotKind::Directory, index, path, outcome);
        }

        Ok(report)
    }

    fn run_directory_item(&mut self, mode: ExecutionMode, target: &Path) -> SlotOutcome {
        let kind = AssetKind::from_path(&target.to_string_lossy());

        match mode {
            ExecutionMode::RunScript => match kind {
                AssetKind::PythonScript => self.execute(target),
                AssetKind::MelScript => self.evaluate(target),
                k if k.is_scene() => {
                    let reason = format!(
                        "{} は実行できません。インポートしてください",
                        target.display()
                    );
                    self.notices.show_notice(&Notice::warning(reason.clone()));
                    SlotOutcome::Refused(reason)
                }
                _ => self.skip(format!("対応していない拡張子です: {}", target.display())),
            },
            _ if mode.is_import() => {
                let as_reference = mode == ExecutionMode::ImportAsReference;
                match ImportRequest::for_scene(target, as_reference) {
                    Some(request) => self.import(&request),
                    None => self.skip(format!(
                        "シーンファイル以外はインポートできません: {}",
                        target.display()
                    )),
                }
            }
            _ => SlotOutcome::Skipped(format!("{} はアイテムに適用できません", mode)),
        }
    }

    fn add_directory(&mut self, index: usize) -> Result<SlotOutcome> {
        let picked = self
            .picker
            .pick_directory(&format!("Get Directory Path {}", index));

        let Some(dir) = self.surface(picked)? else {
            tracing::debug!(slot = index, "directory picker cancelled");
            return Ok(SlotOutcome::Cancelled);
        };

        let normalized = dir.to_string_lossy().replace('\\', "/");
        let result = self
            .registry
            .set_slot_path(SlotKind::Directory, index, &normalized);
        self.surface(result)?;
        self.refresh_directory_items()?;

        Ok(SlotOutcome::Assigned(normalized))
    }

    // ------------------------------------------------------------------
    // ホストへの委譲
    // ------------------------------------------------------------------

    fn execute(&mut self, file: &Path) -> SlotOutcome {
        if !file.is_file() {
            return self.fail(CrbError::PathUnavailable(file.display().to_string()));
        }

        match self.host.execute_script(file) {
            Ok(outcome) => {
                let message = outcome.message().map(str::to_string);
                if let Some(message) = &message {
                    let notice = Notice::with_severity(outcome.severity(), message.clone());
                    self.notices.show_notice(&notice);
                }

                if outcome.status == ScriptStatus::Error {
                    SlotOutcome::Failed(message.unwrap_or_else(|| file.display().to_string()))
                } else {
                    SlotOutcome::Executed { message }
                }
            }
            Err(e) => self.fail(e),
        }
    }

    fn evaluate(&mut self, file: &Path) -> SlotOutcome {
        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) if file.is_file() => {
                return self.fail(CrbError::ScriptExecution(format!("{}: {}", file.display(), e)))
            }
            Err(_) => return self.fail(CrbError::PathUnavailable(file.display().to_string())),
        };

        match self.host.eval_expression(&text) {
            Ok(()) => SlotOutcome::Evaluated,
            Err(e) => self.fail(e),
        }
    }

    fn import(&mut self, request: &ImportRequest) -> SlotOutcome {
        if !request.path.is_file() {
            return self.fail(CrbError::PathUnavailable(request.path.display().to_string()));
        }

        match self.host.import_asset(request) {
            Ok(()) => SlotOutcome::Imported {
                namespace: request.namespace.clone(),
                as_reference: request.as_reference,
            },
            Err(e) => self.fail(e),
        }
    }
}

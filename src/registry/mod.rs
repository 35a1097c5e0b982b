//! スロットレジストリ
//!
//! スロット番号とパスの対応、およびそのディスク上の表現（JSONドキュメント）を管理する。
//! スロットはキャッシュせず、操作のたびにドキュメントを読み直す。

mod store;

use crate::config::Config;
use crate::error::{CrbError, Result};
use crate::scanner;
use crb_tool_common::{display_name, DirectorySlot, SlotDocument, SlotKind, SlotView};
use std::path::Path;

/// activate() の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// プロファイルとドキュメントを作成した
    Created,
    /// プロファイルとドキュメントを削除した
    Removed,
}

#[derive(Debug, Clone)]
pub struct SlotRegistry {
    config: Config,
}

impl SlotRegistry {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// プロファイルディレクトリが存在するか
    pub fn is_activated(&self) -> bool {
        self.config.profile_dir.is_dir()
    }

    /// アクティベート／ディアクティベートの切り替え
    ///
    /// プロファイルがなければ作成してテンプレートからドキュメントを生成する。
    /// あればドキュメントとプロファイルディレクトリを削除する。
    pub fn activate(&self) -> Result<Activation> {
        let profile = &self.config.profile_dir;

        if profile.exists() && !profile.is_dir() {
            return Err(CrbError::Config(format!(
                "プロファイルの場所にディレクトリ以外のファイルがあります: {}",
                profile.display()
            )));
        }

        if !profile.is_dir() {
            let action = store::load_template(&self.config, SlotKind::Action)?;
            let directory = store::load_template(&self.config, SlotKind::Directory)?;

            std::fs::create_dir_all(profile)?;
            self.store(&action)?;
            self.store(&directory)?;

            tracing::info!(profile = %profile.display(), "profile created");
            return Ok(Activation::Created);
        }

        for kind in SlotKind::ALL {
            let path = self.config.document_path(kind);
            if path.is_file() {
                std::fs::remove_file(&path)?;
            }
        }
        std::fs::remove_dir(profile)?;

        tracing::info!(profile = %profile.display(), "profile removed");
        Ok(Activation::Removed)
    }

    fn ensure_activated(&self) -> Result<()> {
        if self.is_activated() {
            Ok(())
        } else {
            Err(CrbError::NotActivated(
                self.config.profile_dir.display().to_string(),
            ))
        }
    }

    /// ドキュメントを読み込み
    pub fn load(&self, kind: SlotKind) -> Result<SlotDocument> {
        self.ensure_activated()?;
        store::read_document(&self.config.document_path(kind), kind)
    }

    fn store(&self, document: &SlotDocument) -> Result<()> {
        store::write_document(&self.config.document_path(document.kind()), document)
    }

    /// スロットにパスを設定してドキュメント全体を書き直す
    pub fn set_slot_path(&self, kind: SlotKind, index: usize, path: &str) -> Result<()> {
        kind.check_index(index)?;
        let mut document = self.load(kind)?;
        document.set(index, path)?;
        self.store(&document)?;

        tracing::info!(slot = %kind.key(index), path, "slot assigned");
        Ok(())
    }

    /// スロットのパスをクリア
    pub fn clear_slot(&self, kind: SlotKind, index: usize) -> Result<()> {
        kind.check_index(index)?;
        let mut document = self.load(kind)?;
        document.clear(index)?;
        self.store(&document)?;

        tracing::info!(slot = %kind.key(index), "slot cleared");
        Ok(())
    }

    /// ドキュメントをテンプレートで上書き
    ///
    /// 破損したドキュメントも読まずに上書きする（明示的なリセットのみが復旧手段）。
    pub fn reset_all(&self, kind: SlotKind) -> Result<()> {
        self.ensure_activated()?;
        let template = store::load_template(&self.config, kind)?;
        self.store(&template)?;

        tracing::info!(%kind, "slots reset");
        Ok(())
    }

    pub fn slot_path(&self, kind: SlotKind, index: usize) -> Result<Option<String>> {
        kind.check_index(index)?;
        let document = self.load(kind)?;
        Ok(document.get(index)?.map(str::to_string))
    }

    /// 全スロットの表示情報（インデックス順）
    pub fn list_slots(&self, kind: SlotKind) -> Result<Vec<SlotView>> {
        let document = self.load(kind)?;

        let views = document
            .entries()
            .map(|(index, path)| match path {
                Some(path) => SlotView {
                    kind,
                    index,
                    path: Some(path.to_string()),
                    display_name: display_name(path),
                    tooltip: Some(tooltip(kind, path)),
                },
                None => SlotView {
                    kind,
                    index,
                    path: None,
                    display_name: display_name(&kind.key(index)),
                    tooltip: None,
                },
            })
            .collect();

        Ok(views)
    }

    /// ディレクトリスロットの対象ファイル一覧
    ///
    /// 未割り当てなら空。割り当て済みでディレクトリがなければ PathUnavailable。
    pub fn list_directory_items(&self, index: usize) -> Result<Vec<String>> {
        match self.slot_path(SlotKind::Directory, index)? {
            Some(dir) => scanner::list_directory_items(Path::new(&dir), &self.config.supported_extensions),
            None => Ok(Vec::new()),
        }
    }

    /// ディレクトリスロットと派生アイテム一覧
    ///
    /// 見つからないディレクトリは空の一覧で available = false。
    pub fn list_directory_slots(&self) -> Result<Vec<DirectorySlot>> {
        let document = self.load(SlotKind::Directory)?;

        let mut slots = Vec::new();
        for (index, path) in document.entries() {
            let (items, available) = match path {
                Some(dir) => {
                    match scanner::list_directory_items(Path::new(dir), &self.config.supported_extensions) {
                        Ok(items) => (items, true),
                        Err(CrbError::PathUnavailable(_)) => {
                            tracing::warn!(slot = index, dir, "directory not found");
                            (Vec::new(), false)
                        }
                        Err(e) => return Err(e),
                    }
                }
                None => (Vec::new(), true),
            };
            slots.push(DirectorySlot {
                index,
                path: path.map(str::to_string),
                items,
                available,
            });
        }

        Ok(slots)
    }
}

/// ツールチップ: 同名の .txt があればその内容、なければパス
fn tooltip(kind: SlotKind, path: &str) -> String {
    if kind == SlotKind::Action {
        let sidecar = Path::new(path).with_extension("txt");
        if sidecar.is_file() {
            if let Ok(text) = std::fs::read_to_string(&sidecar) {
                return text.trim_end().to_string();
            }
        }
    }
    format!("Directory: {}", path)
}

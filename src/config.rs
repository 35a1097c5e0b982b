use crate::error::{CrbError, Result};
use crb_tool_common::{SlotKind, SUPPORTED_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TOOL_NAME: &str = "CRBTool";
pub const VERSION_NOTE: &str = "CRBTool - Mini Tool for Render - version 0.9 Beta";

/// レジストリ／ディスパッチャに渡す設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// プロファイルディレクトリ（存在すればアクティベート済み）
    pub profile_dir: PathBuf,
    /// アクションスロットのドキュメント名
    pub action_document: String,
    /// ディレクトリスロットのドキュメント名
    pub directory_document: String,
    /// ディレクトリ一覧の対象拡張子
    pub supported_extensions: Vec<String>,
    pub templates: TemplateDocuments,
    pub host: HostConfig,
}

/// テンプレートドキュメント（未指定なら全スロット空）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateDocuments {
    pub action: Option<PathBuf>,
    pub directory: Option<PathBuf>,
}

/// ホスト連携コマンド
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HostConfig {
    /// .py を実行するインタプリタ
    pub python: String,
    /// MELを評価するコマンドライン（空なら未設定）。最後の引数にMELテキストを渡す
    pub mel: Vec<String>,
    /// シーンをインポートするコマンドライン（空なら未設定）
    pub importer: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            python: "python".into(),
            mel: Vec::new(),
            importer: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CrbError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("crb-tool").join("config.json"))
    }

    /// 指定プロファイルディレクトリでデフォルト設定を作る
    pub fn with_profile_dir(profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_dir: profile_dir.into(),
            ..Self::default_config()
        }
    }

    fn default_config() -> Self {
        let profile_dir = dirs::home_dir()
            .map(|home| home.join(TOOL_NAME))
            .unwrap_or_else(|| PathBuf::from(TOOL_NAME));

        Self {
            profile_dir,
            action_document: "save.json".into(),
            directory_document: "cus_save.json".into(),
            supported_extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            templates: TemplateDocuments::default(),
            host: HostConfig::default(),
        }
    }

    /// スロット種別ごとのドキュメントパス
    pub fn document_path(&self, kind: SlotKind) -> PathBuf {
        let name = match kind {
            SlotKind::Action => &self.action_document,
            SlotKind::Directory => &self.directory_document,
        };
        self.profile_dir.join(name)
    }

    pub fn template_path(&self, kind: SlotKind) -> Option<&Path> {
        match kind {
            SlotKind::Action => self.templates.action.as_deref(),
            SlotKind::Directory => self.templates.directory.as_deref(),
        }
    }

    pub fn set_python(&mut self, command: String) -> Result<()> {
        self.host.python = command;
        self.save()
    }
}

/// ウィンドウタイトル（例: "CRBTool: alice"）
pub fn window_title() -> String {
    let user = std::env::var("USERNAME")
        .or_else(|_| std::env::var("USER"))
        .unwrap_or_else(|_| "unknown".into());
    format!("{}: {}", TOOL_NAME, user)
}

//! ディレクトリスロットに一括適用する実行モード

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// スクリプト実行（デフォルト）
    #[default]
    RunScript,
    /// シーンをインポート
    ImportAsset,
    /// シーンをリファレンスとしてインポート
    ImportAsReference,
    /// ディレクトリを追加
    AddDirectory,
    /// ディレクトリをリセット
    ResetDirectories,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 5] = [
        ExecutionMode::RunScript,
        ExecutionMode::ImportAsset,
        ExecutionMode::ImportAsReference,
        ExecutionMode::AddDirectory,
        ExecutionMode::ResetDirectories,
    ];

    /// 実行ボタンのラベル
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionMode::RunScript => "Run Script",
            ExecutionMode::ImportAsset => "Import Maya",
            ExecutionMode::ImportAsReference => "Import Ref Maya",
            ExecutionMode::AddDirectory => "Add Dir",
            ExecutionMode::ResetDirectories => "Reset Dir",
        }
    }

    pub fn is_import(&self) -> bool {
        matches!(self, ExecutionMode::ImportAsset | ExecutionMode::ImportAsReference)
    }
}

impl std::str::FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "run" | "run-script" | "run script" => Ok(ExecutionMode::RunScript),
            "import" | "import-asset" | "import maya" => Ok(ExecutionMode::ImportAsset),
            "import-ref" | "reference" | "import-as-reference" | "import ref maya" => {
                Ok(ExecutionMode::ImportAsReference)
            }
            "add" | "add-dir" | "add-directory" | "add dir" => Ok(ExecutionMode::AddDirectory),
            "reset" | "reset-dir" | "reset-directories" | "reset dir" => {
                Ok(ExecutionMode::ResetDirectories)
            }
            _ => Err(format!(
                "Unknown mode: {}. Use run, import, import-ref, add-dir, or reset-dir",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

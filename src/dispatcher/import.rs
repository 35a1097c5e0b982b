//! シーンインポートの要求内容
//!
//! ネームスペースはファイル名（拡張子なし）、バージョン0、ネームスペース衝突時はマージしない。

use crb_tool_common::{file_stem, AssetKind};
use std::path::{Path, PathBuf};

/// ホストに渡すインポートオプション文字列
pub const IMPORT_OPTIONS: &str = "v=0;p=17;f=0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    pub path: PathBuf,
    pub namespace: String,
    pub asset_kind: AssetKind,
    pub as_reference: bool,
    pub version: u32,
    pub preserve_references: bool,
    pub merge_namespaces_on_clash: bool,
    pub ignore_version: bool,
    pub options: &'static str,
}

impl ImportRequest {
    /// .ma / .mb 以外は None
    pub fn for_scene(path: &Path, as_reference: bool) -> Option<Self> {
        let path_str = path.to_string_lossy();
        let asset_kind = AssetKind::from_path(&path_str);
        if !asset_kind.is_scene() {
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            namespace: file_stem(&path_str).to_string(),
            asset_kind,
            as_reference,
            version: 0,
            preserve_references: as_reference,
            merge_namespaces_on_clash: false,
            ignore_version: true,
            options: IMPORT_OPTIONS,
        })
    }

    pub fn scene_type(&self) -> &'static str {
        self.asset_kind.scene_type().unwrap_or("mayaAscii")
    }

    /// インポートコマンドの引数
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.path.to_string_lossy().to_string(),
            "--namespace".into(),
            self.namespace.clone(),
            "--type".into(),
            self.scene_type().into(),
            "--options".into(),
            self.options.into(),
        ];
        if self.as_reference {
            args.push("--reference".into());
        }
        if self.preserve_references {
            args.push("--preserve-references".into());
        }
        if self.ignore_version {
            args.push("--ignore-version".into());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_scene_import() {
        let request = ImportRequest::for_scene(Path::new("C:/assets/char_hero.mb"), false).unwrap();
        assert_eq!(request.namespace, "char_hero");
        assert!(!request.as_reference);
        assert!(!request.preserve_references);
        assert!(!request.merge_namespaces_on_clash);
        assert_eq!(request.version, 0);
        assert_eq!(request.scene_type(), "mayaBinary");
    }

    #[test]
    fn test_reference_import() {
        let request = ImportRequest::for_scene(Path::new("C:/assets/set_forest.ma"), true).unwrap();
        assert_eq!(request.namespace, "set_forest");
        assert!(request.as_reference);
        assert!(request.preserve_references);
        assert_eq!(request.scene_type(), "mayaAscii");
    }

    #[test]
    fn test_scripts_are_not_scenes() {
        assert!(ImportRequest::for_scene(Path::new("C:/scripts/a.py"), false).is_none());
        assert!(ImportRequest::for_scene(Path::new("C:/scripts/a.mel"), true).is_none());
    }

    #[test]
    fn test_to_args() {
        let request = ImportRequest::for_scene(Path::new("/assets/prop.ma"), true).unwrap();
        let args = request.to_args();
        assert_eq!(args[0], "/assets/prop.ma");
        assert!(args.windows(2).any(|w| w[0] == "--namespace" && w[1] == "prop"));
        assert!(args.contains(&"--reference".to_string()));
        assert!(args.contains(&"v=0;p=17;f=0".to_string()));
    }
}

use crate::error::{CrbError, Result};
use crb_tool_common::asset::has_extension;
use std::path::Path;
use walkdir::WalkDir;

/// ディレクトリ直下の対象ファイル名を列挙
///
/// 順序はファイルシステムの列挙順のまま（ソートしない）。
pub fn list_directory_items(folder: &Path, extensions: &[String]) -> Result<Vec<String>> {
    if !folder.is_dir() {
        return Err(CrbError::PathUnavailable(folder.display().to_string()));
    }

    let mut items = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if has_extension(&name, extensions) {
            items.push(name);
        }
    }

    tracing::debug!(folder = %folder.display(), count = items.len(), "listed directory items");

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn default_extensions() -> Vec<String> {
        crb_tool_common::SUPPORTED_EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_list_folder_not_found() {
        let result = list_directory_items(Path::new("/nonexistent/folder"), &default_extensions());
        assert!(matches!(result, Err(CrbError::PathUnavailable(_))));
    }

    #[test]
    fn test_list_folder_empty() {
        let dir = tempdir().unwrap();
        let result = list_directory_items(dir.path(), &default_extensions()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_list_filters_extensions() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.ma")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("c.py")).unwrap();

        let result = list_directory_items(dir.path(), &default_extensions()).unwrap();
        let names: HashSet<String> = result.into_iter().collect();
        let expected: HashSet<String> = ["a.ma", "c.py"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_list_skips_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.py")).unwrap();
        File::create(dir.path().join("nested.py").join("inner.mel")).unwrap();
        File::create(dir.path().join("rig.mb")).unwrap();

        let result = list_directory_items(dir.path(), &default_extensions()).unwrap();
        assert_eq!(result, vec!["rig.mb".to_string()]);
    }

    #[test]
    fn test_list_file_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.py");
        File::create(&file).unwrap();

        let result = list_directory_items(&file, &default_extensions());
        assert!(matches!(result, Err(CrbError::PathUnavailable(_))));
    }
}

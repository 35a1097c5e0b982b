//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use crb_tool::error::CrbError;
use crb_tool::scanner;
use std::path::Path;
use tempfile::tempdir;

fn extensions() -> Vec<String> {
    crb_tool_common::SUPPORTED_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

/// 存在しないフォルダの一覧
#[test]
fn test_list_nonexistent_folder() {
    let result = scanner::list_directory_items(Path::new("/nonexistent/path/12345"), &extensions());
    assert!(matches!(result, Err(CrbError::PathUnavailable(_))));
}

/// 空のフォルダは空の一覧
#[test]
fn test_list_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::list_directory_items(dir.path(), &extensions());

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 対象拡張子のないフォルダ
#[test]
fn test_list_folder_without_assets() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::list_directory_items(dir.path(), &extensions());
    assert!(result.unwrap().is_empty());
}

/// CrbErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CrbError::Config("テスト設定エラー".to_string()),
        CrbError::NotActivated("/home/alice/CRBTool".to_string()),
        CrbError::CorruptState("save.json".to_string()),
        CrbError::PathUnavailable("C:/scripts/a.py".to_string()),
        CrbError::ScriptExecution("Traceback".to_string()),
        CrbError::HostImport("char_hero.mb".to_string()),
        CrbError::HostUnavailable("mel".to_string()),
        CrbError::UnknownItem {
            index: 2,
            item: "ghost.ma".to_string(),
        },
        CrbError::Prompt("EOF".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 中断すべきエラーの判定
#[test]
fn test_fatal_errors() {
    assert!(CrbError::NotActivated("x".into()).is_fatal());
    assert!(CrbError::CorruptState("x".into()).is_fatal());
    assert!(!CrbError::ScriptExecution("x".into()).is_fatal());
    assert!(!CrbError::PathUnavailable("x".into()).is_fatal());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CrbError = io_err.into();

    assert!(matches!(err, CrbError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CrbError = json_err.into();

    assert!(matches!(err, CrbError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = crb_tool_common::SlotKind::Action.check_index(7).unwrap_err();
    let expected = common_err.to_string();
    let err: CrbError = common_err.into();

    assert!(matches!(err, CrbError::Common(_)));
    assert_eq!(format!("{}", err), expected);
}

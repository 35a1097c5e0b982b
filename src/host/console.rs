//! 端末用のファイルピッカーと通知表示

use super::{FilePicker, NoticeSink};
use crate::error::{CrbError, Result};
use crb_tool_common::asset::has_extension;
use crb_tool_common::{Notice, Severity};
use dialoguer::Input;
use std::path::{Path, PathBuf};

/// dialoguer で入力させるピッカー（空入力=キャンセル）
#[derive(Debug, Default)]
pub struct ConsolePicker;

impl ConsolePicker {
    pub fn new() -> Self {
        Self
    }
}

/// 貼り付けたパスの前後の引用符を除く
fn clean_input(input: &str) -> &str {
    input.trim().trim_matches('"').trim_matches('\'')
}

impl FilePicker for ConsolePicker {
    fn pick_file(&mut self, title: &str, extensions: &[&str]) -> Result<Option<PathBuf>> {
        let filter: Vec<String> = extensions.iter().map(|e| e.to_string()).collect();
        let prompt = format!(
            "{} (*.{}、空でキャンセル)",
            title,
            extensions.join(" *.")
        );

        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                let path = clean_input(input);
                if path.is_empty() {
                    return Ok(());
                }
                if !Path::new(path).is_file() {
                    return Err(format!("ファイルが見つかりません: {}", path));
                }
                if !has_extension(path, &filter) {
                    return Err(format!("対象外の拡張子です: {}", path));
                }
                Ok(())
            })
            .interact_text()
            .map_err(|e| CrbError::Prompt(e.to_string()))?;

        let path = clean_input(&input);
        Ok((!path.is_empty()).then(|| PathBuf::from(path)))
    }

    fn pick_directory(&mut self, title: &str) -> Result<Option<PathBuf>> {
        let input: String = Input::new()
            .with_prompt(format!("{} (空でキャンセル)", title))
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                let path = clean_input(input);
                if path.is_empty() || Path::new(path).is_dir() {
                    Ok(())
                } else {
                    Err(format!("ディレクトリが見つかりません: {}", path))
                }
            })
            .interact_text()
            .map_err(|e| CrbError::Prompt(e.to_string()))?;

        let path = clean_input(&input);
        Ok((!path.is_empty()).then(|| PathBuf::from(path)))
    }
}

/// 通知を端末に表示
#[derive(Debug, Default)]
pub struct ConsoleNotices;

impl ConsoleNotices {
    pub fn new() -> Self {
        Self
    }
}

impl NoticeSink for ConsoleNotices {
    fn show_notice(&mut self, notice: &Notice) {
        let time = chrono::Local::now().format("%H:%M:%S");
        match notice.severity {
            Severity::Information => {
                println!("ℹ [{}] {}: {}", time, notice.title, notice.message)
            }
            Severity::Warning => {
                println!("⚠ [{}] {}: {}", time, notice.title, notice.message)
            }
            Severity::Error => {
                eprintln!("✖ [{}] {}: {}", time, notice.title, notice.message)
            }
        }
    }
}

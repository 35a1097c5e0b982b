//! 外部プロセス経由のホスト連携
//!
//! スクリプトは標準出力の最終行に `{"status": "...", "message": "..."}` を出力すると
//! 結果として扱われる。それ以外の出力は結果なし（ok）とみなす。

use super::ScriptHost;
use crate::config::HostConfig;
use crate::dispatcher::ImportRequest;
use crate::error::{CrbError, Result};
use crb_tool_common::ScriptOutcome;
use std::path::Path;
use std::process::{Command, Output};

pub struct ProcessHost {
    config: HostConfig,
}

impl ProcessHost {
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }
}

impl ScriptHost for ProcessHost {
    fn execute_script(&mut self, path: &Path) -> Result<ScriptOutcome> {
        let output = Command::new(&self.config.python)
            .arg(path)
            .output()
            .map_err(|e| {
                CrbError::ScriptExecution(format!("{} の起動に失敗: {}", self.config.python, e))
            })?;

        check_status(&output).map_err(|detail| {
            CrbError::ScriptExecution(format!("{}: {}", path.display(), detail))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::debug!(script = %path.display(), bytes = stdout.len(), "script finished");

        Ok(parse_outcome(&stdout))
    }

    fn eval_expression(&mut self, text: &str) -> Result<()> {
        let (program, args) = self
            .config
            .mel
            .split_first()
            .ok_or_else(|| CrbError::HostUnavailable("MEL評価コマンド (host.mel)".into()))?;

        let output = Command::new(program)
            .args(args)
            .arg(text)
            .output()
            .map_err(|e| CrbError::ScriptExecution(format!("{} の起動に失敗: {}", program, e)))?;

        check_status(&output).map_err(CrbError::ScriptExecution)
    }

    fn import_asset(&mut self, request: &ImportRequest) -> Result<()> {
        let (program, args) = self
            .config
            .importer
            .split_first()
            .ok_or_else(|| CrbError::HostUnavailable("インポートコマンド (host.importer)".into()))?;

        let output = Command::new(program)
            .args(args)
            .args(request.to_args())
            .output()
            .map_err(|e| CrbError::HostImport(format!("{} の起動に失敗: {}", program, e)))?;

        check_status(&output).map_err(|detail| {
            CrbError::HostImport(format!("{}: {}", request.path.display(), detail))
        })
    }
}

fn check_status(output: &Output) -> std::result::Result<(), String> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(format!(
        "failed (code {:?}): {}",
        output.status.code(),
        stderr.trim()
    ))
}

/// 標準出力の最終行から構造化結果を取り出す
pub fn parse_outcome(stdout: &str) -> ScriptOutcome {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| line.starts_with('{'))
        .and_then(|line| serde_json::from_str(line).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crb_tool_common::ScriptStatus;

    #[test]
    fn test_parse_outcome_last_line() {
        let stdout = "baking...\n{\"status\": \"ok\", \"message\": \"12 lights baked\"}\n\n";
        let outcome = parse_outcome(stdout);
        assert_eq!(outcome.status, ScriptStatus::Ok);
        assert_eq!(outcome.message(), Some("12 lights baked"));
    }

    #[test]
    fn test_parse_outcome_plain_output() {
        let outcome = parse_outcome("hello\nworld\n");
        assert_eq!(outcome, ScriptOutcome::default());
    }

    #[test]
    fn test_parse_outcome_error_status() {
        let outcome = parse_outcome(r#"{"status": "error", "message": "no camera"}"#);
        assert_eq!(outcome.status, ScriptStatus::Error);
    }

    #[test]
    fn test_parse_outcome_empty() {
        assert_eq!(parse_outcome(""), ScriptOutcome::default());
    }

    #[test]
    fn test_unconfigured_mel() {
        let mut host = ProcessHost::new(HostConfig::default());
        let result = host.eval_expression("print \"hi\";");
        assert!(matches!(result, Err(CrbError::HostUnavailable(_))));
    }

    #[test]
    fn test_unconfigured_importer() {
        let mut host = ProcessHost::new(HostConfig::default());
        let request = ImportRequest::for_scene(Path::new("C:/assets/char_hero.mb"), false)
            .expect("scene request");
        let result = host.import_asset(&request);
        assert!(matches!(result, Err(CrbError::HostUnavailable(_))));
    }

    #[test]
    fn test_missing_interpreter() {
        let mut host = ProcessHost::new(HostConfig {
            python: "crb-no-such-interpreter".into(),
            ..HostConfig::default()
        });
        let result = host.execute_script(Path::new("a.py"));
        assert!(matches!(result, Err(CrbError::ScriptExecution(_))));
    }
}

//! スクリプト実行結果と通知の型定義
//!
//! スクリプトは `{"status": "...", "message": "..."}` の形で結果を返す。

use serde::{Deserialize, Serialize};

/// 通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Information,
    Warning,
    Error,
}

/// スクリプトが返すステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    #[default]
    Ok,
    Warning,
    Error,
}

/// スクリプト実行の構造化結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptOutcome {
    pub status: ScriptStatus,
    pub message: Option<String>,
}

impl ScriptOutcome {
    pub fn ok(message: Option<String>) -> Self {
        Self {
            status: ScriptStatus::Ok,
            message,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.status {
            ScriptStatus::Ok => Severity::Information,
            ScriptStatus::Warning => Severity::Warning,
            ScriptStatus::Error => Severity::Error,
        }
    }

    /// 空白のみのメッセージはなしとして扱う
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// 通知面に表示する内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// 重要度に応じたタイトルを付ける
    pub fn with_severity(severity: Severity, message: impl Into<String>) -> Self {
        match severity {
            Severity::Information => Self::information(message),
            Severity::Warning => Self::warning(message),
            Severity::Error => Self::error(message),
        }
    }

    pub fn information(message: impl Into<String>) -> Self {
        Self::new("Information", message, Severity::Information)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new("Warning", message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message, Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_outcome() {
        let outcome: ScriptOutcome =
            serde_json::from_str(r#"{"status": "warning", "message": "3 lights skipped"}"#).unwrap();
        assert_eq!(outcome.status, ScriptStatus::Warning);
        assert_eq!(outcome.message(), Some("3 lights skipped"));
        assert_eq!(outcome.severity(), Severity::Warning);
    }

    #[test]
    fn test_parse_outcome_defaults() {
        let outcome: ScriptOutcome = serde_json::from_str("{}").unwrap();
        assert_eq!(outcome, ScriptOutcome::ok(None));
        assert_eq!(outcome.severity(), Severity::Information);
    }

    #[test]
    fn test_blank_message_is_none() {
        let outcome = ScriptOutcome::ok(Some("   ".to_string()));
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn test_notice_constructors() {
        let notice = Notice::error("boom");
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(Notice::information("hi").title, "Information");
        assert_eq!(Notice::with_severity(Severity::Warning, "w").title, "Warning");
    }
}

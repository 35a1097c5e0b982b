//! スロットドキュメント（save.json / cus_save.json）
//!
//! メモリ上は固定長配列（1..N）として保持し、JSONへの変換は境界でのみ行う。
//! JSON形式: キーはソート済み、インデント4スペース、値はパス文字列（空文字=未割り当て）。

use crate::error::{Error, Result};
use crate::slot::SlotKind;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// 固定長のスロットドキュメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDocument {
    kind: SlotKind,
    paths: Vec<String>,
}

impl SlotDocument {
    /// 全スロット未割り当てのテンプレート
    pub fn empty(kind: SlotKind) -> Self {
        Self {
            kind,
            paths: vec![String::new(); kind.capacity()],
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// スロットのパス（未割り当てならNone）
    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        self.kind.check_index(index)?;
        let path = self.paths[index - 1].as_str();
        Ok(if path.is_empty() { None } else { Some(path) })
    }

    pub fn set(&mut self, index: usize, path: &str) -> Result<()> {
        self.kind.check_index(index)?;
        self.paths[index - 1] = path.to_string();
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<()> {
        self.set(index, "")
    }

    pub fn clear_all(&mut self) {
        self.paths.iter_mut().for_each(String::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.paths.iter().all(String::is_empty)
    }

    /// (インデックス, パス) をインデックス順に列挙
    pub fn entries(&self) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
        self.paths.iter().enumerate().map(|(i, p)| {
            let path = if p.is_empty() { None } else { Some(p.as_str()) };
            (i + 1, path)
        })
    }

    /// キー → パスのマップ（全キーを含む）
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (self.kind.key(i + 1), p.clone()))
            .collect()
    }

    /// JSON文字列にシリアライズ
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.to_map().serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| Error::CorruptDocument(e.to_string()))
    }

    /// JSON文字列から読み込み
    ///
    /// 想定外のキーや文字列以外の値はエラー。欠けているキーは未割り当て扱い。
    pub fn from_json(kind: SlotKind, json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::CorruptDocument(e.to_string()))?;

        let object = value.as_object().ok_or_else(|| {
            Error::CorruptDocument(format!("{} document is not a JSON object", kind))
        })?;

        let mut doc = Self::empty(kind);
        for (key, value) in object {
            let index = parse_key(kind, key)?;
            let path = value.as_str().ok_or_else(|| {
                Error::CorruptDocument(format!("value of \"{}\" is not a string", key))
            })?;
            doc.paths[index - 1] = path.to_string();
        }

        Ok(doc)
    }
}

/// "Action 3" のようなキーからインデックスを取り出す
fn parse_key(kind: SlotKind, key: &str) -> Result<usize> {
    lazy_static::lazy_static! {
        static ref KEY_RE: Regex = Regex::new(r"^(Action|Directory) ([0-9]+)$").unwrap();
    }

    let unexpected = || Error::CorruptDocument(format!("unexpected key \"{}\"", key));

    let caps = KEY_RE.captures(key).ok_or_else(unexpected)?;
    if &caps[1] != kind.label() {
        return Err(unexpected());
    }
    let index: usize = caps[2].parse().map_err(|_| unexpected())?;
    kind.check_index(index).map_err(|_| unexpected())?;
    Ok(index)
}

use clap::{Parser, Subcommand};
use crb_tool_common::ExecutionMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crb")]
#[command(about = "クイックアクション／カスタムディレクトリの登録と実行", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// プロファイルディレクトリ（省略時は設定ファイルの値）
    #[arg(long, global = true)]
    pub profile_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アクティベート／ディアクティベートを切り替え
    Activate,

    /// スロットの状態を表示
    Status,

    /// アクションスロットにスクリプトを割り当て
    Assign {
        /// スロット番号 (1-6)
        #[arg(required = true)]
        index: usize,

        /// スクリプトのパス（省略時は対話入力）
        path: Option<PathBuf>,
    },

    /// アクションスロットの割り当てを解除
    Clear {
        /// スロット番号 (1-6)
        #[arg(required = true)]
        index: usize,
    },

    /// 全スロットをリセット
    Reset,

    /// ディレクトリスロットのアイテム一覧を表示
    Items {
        /// スロット番号 (1-3)、省略時は全て
        index: Option<usize>,
    },

    /// 有効なアクションを順に実行
    Run {
        /// 有効にするスロット（例: 1,3）。省略時は全スロット
        #[arg(short, long, value_delimiter = ',')]
        enable: Vec<usize>,
    },

    /// ディレクトリスロットにモードを適用
    Dir {
        /// 実行モード (run/import/import-ref/add-dir/reset-dir)
        #[arg(required = true)]
        mode: ExecutionMode,

        /// 有効にするスロット（例: 1,2）。省略時は全スロット
        #[arg(short, long, value_delimiter = ',')]
        enable: Vec<usize>,

        /// 選択アイテム（例: 2=char_hero.mb）
        #[arg(short, long, value_parser = parse_selection)]
        select: Vec<(usize, String)>,
    },

    /// 設定を表示/編集
    Config {
        /// Pythonインタプリタを設定
        #[arg(long)]
        set_python: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// バージョン情報
    About,
}

/// "2=char_hero.mb" を (2, "char_hero.mb") に分解
pub fn parse_selection(s: &str) -> Result<(usize, String), String> {
    let (index, item) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid selection: {}. Use INDEX=ITEM", s))?;

    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("Invalid slot index: {}", index))?;

    let item = item.trim();
    if item.is_empty() {
        return Err(format!("Empty item in selection: {}", s));
    }

    Ok((index, item.to_string()))
}

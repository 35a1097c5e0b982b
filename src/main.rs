use anyhow::Context;
use clap::Parser;
use crb_tool::cli::{Cli, Commands};
use crb_tool::config::{self, Config};
use crb_tool::dispatcher::{BatchReport, Dispatcher, SlotOutcome};
use crb_tool::host::{ConsoleNotices, ConsolePicker, ProcessHost};
use crb_tool::registry::{Activation, SlotRegistry};
use crb_tool_common::{SlotKind, SlotState};

type ConsoleDispatcher = Dispatcher<ProcessHost, ConsolePicker, ConsoleNotices>;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "crb_tool=debug,crb=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load().context("設定の読み込みに失敗しました")?;
    if let Some(dir) = cli.profile_dir {
        config.profile_dir = dir;
    }

    let command = match cli.command {
        Commands::Config { set_python, show } => {
            if let Some(command) = set_python {
                config.set_python(command)?;
                println!("✔ Pythonインタプリタを設定しました");
            }

            if show {
                println!("設定:");
                println!("  プロファイル: {}", config.profile_dir.display());
                println!("  アクション: {}", config.document_path(SlotKind::Action).display());
                println!("  ディレクトリ: {}", config.document_path(SlotKind::Directory).display());
                println!("  対象拡張子: {}", config.supported_extensions.join(", "));
                println!("  Python: {}", config.host.python);
                println!("  MEL: {}", describe_command(&config.host.mel));
                println!("  インポート: {}", describe_command(&config.host.importer));
            }
            return Ok(());
        }
        command => command,
    };

    let registry = SlotRegistry::new(config.clone());
    let mut dispatcher = Dispatcher::new(
        registry,
        ProcessHost::new(config.host.clone()),
        ConsolePicker::new(),
        ConsoleNotices::new(),
    );

    println!("🎬 {}\n", config::window_title());

    match command {
        Commands::Activate => match dispatcher.activate()? {
            Activation::Created => println!("✔ プロファイルを作成しました: {}", config.profile_dir.display()),
            Activation::Removed => println!("✔ プロファイルを削除しました: {}", config.profile_dir.display()),
        },

        Commands::Status => {
            if !dispatcher.registry().is_activated() {
                println!("未アクティベート（`crb activate` で開始）");
                return Ok(());
            }
            dispatcher.refresh_directory_items()?;
            print_status(&dispatcher)?;
        }

        Commands::Assign { index, path } => {
            let assigned = match path {
                Some(path) => Some(dispatcher.assign_action_path(index, &path)?),
                None => dispatcher.assign_action(index)?,
            };
            match assigned {
                Some(path) => println!("✔ Action {} に割り当てました: {}", index, path),
                None => println!("キャンセルしました"),
            }
        }

        Commands::Clear { index } => {
            dispatcher.clear_action(index)?;
            println!("✔ Action {} を解除しました", index);
        }

        Commands::Reset => {
            dispatcher.reset()?;
            println!("✔ 全スロットをリセットしました");
        }

        Commands::Items { index } => {
            let slots = dispatcher.registry().list_directory_slots()?;
            for slot in slots.iter().filter(|s| index.map_or(true, |i| i == s.index)) {
                match &slot.path {
                    Some(path) if !slot.available => {
                        println!("[Directory {}] {} (見つかりません)", slot.index, path)
                    }
                    Some(path) => println!("[Directory {}] {} ({}件)", slot.index, path, slot.items.len()),
                    None => println!("[Directory {}] 未割り当て", slot.index),
                }
                for item in &slot.items {
                    println!("  - {}", item);
                }
            }
        }

        Commands::Run { enable } => {
            let indices: Vec<usize> = if enable.is_empty() {
                SlotKind::Action.indices().collect()
            } else {
                enable
            };
            for index in indices {
                dispatcher.set_enabled(SlotKind::Action, index, true)?;
            }

            println!("▶ アクションを実行中...");
            let report = dispatcher.run_actions()?;
            print_report(&report);
        }

        Commands::Dir { mode, enable, select } => {
            if dispatcher.registry().is_activated() {
                dispatcher.refresh_directory_items()?;
            }

            let indices: Vec<usize> = if enable.is_empty() {
                SlotKind::Directory.indices().collect()
            } else {
                enable
            };
            for index in indices {
                dispatcher.set_enabled(SlotKind::Directory, index, true)?;
            }
            for (index, item) in &select {
                dispatcher.select_item(*index, item)?;
            }
            dispatcher.set_mode(mode);

            println!("▶ {}...", mode);
            let report = dispatcher.run_directories()?;
            print_report(&report);
        }

        Commands::About => {
            println!("{}", config::VERSION_NOTE);
        }

        Commands::Config { .. } => unreachable!("handled before dispatcher setup"),
    }

    Ok(())
}

fn describe_command(command: &[String]) -> String {
    if command.is_empty() {
        "未設定".into()
    } else {
        command.join(" ")
    }
}

fn print_status(dispatcher: &ConsoleDispatcher) -> anyhow::Result<()> {
    let registry = dispatcher.registry();

    println!("[Actions]");
    for slot in registry.list_slots(SlotKind::Action)? {
        let marker = match dispatcher.action_state(slot.index)? {
            SlotState::Unassigned => "+",
            SlotState::Assigned => "-",
            SlotState::EnabledAndAssigned => "✔",
        };
        match &slot.path {
            Some(path) => println!("  {} {}) {}  {}", marker, slot.index, slot.display_name, path),
            None => println!("  {} {}) {}", marker, slot.index, slot.display_name),
        }
        if let Some(tooltip) = slot.tooltip.as_deref().filter(|t| !t.starts_with("Directory: ")) {
            println!("       {}", tooltip.replace('\n', "\n       "));
        }
    }

    println!("\n[Directories] モード: {}", dispatcher.panel().mode());
    for slot in registry.list_slots(SlotKind::Directory)? {
        match &slot.path {
            Some(path) => println!("  {}) {}", slot.index, path),
            None => println!("  {}) 未割り当て", slot.index),
        }
        let selected = dispatcher.panel().selected_item(slot.index)?;
        for item in dispatcher.directory_items(slot.index)? {
            let mark = if Some(item.as_str()) == selected { "*" } else { " " };
            println!("     {} {}", mark, item);
        }
    }

    Ok(())
}

fn print_report(report: &BatchReport) {
    if report.is_empty() {
        println!("対象スロットがありません");
        return;
    }

    for slot in &report.slots {
        let label = slot.kind.key(slot.index);
        let line = match &slot.outcome {
            SlotOutcome::Executed { message: Some(m) } => format!("✔ 実行: {}", m),
            SlotOutcome::Executed { message: None } => "✔ 実行".to_string(),
            SlotOutcome::Evaluated => "✔ MEL評価".to_string(),
            SlotOutcome::Imported { namespace, as_reference: true } => format!("✔ リファレンス: {}", namespace),
            SlotOutcome::Imported { namespace, as_reference: false } => format!("✔ インポート: {}", namespace),
            SlotOutcome::Refused(reason) => format!("⚠ 拒否: {}", reason),
            SlotOutcome::Skipped(reason) => format!("- スキップ: {}", reason),
            SlotOutcome::Failed(reason) => format!("✖ 失敗: {}", reason),
            SlotOutcome::Assigned(path) => format!("✔ 追加: {}", path),
            SlotOutcome::Cancelled => "- キャンセル".to_string(),
            SlotOutcome::Reset => "✔ リセット".to_string(),
        };
        println!("  {}: {}", label, line);
    }

    let failed = report.failures().count();
    if failed == 0 {
        println!("\n✅ 完了");
    } else {
        println!("\n⚠ {}件失敗", failed);
    }
}

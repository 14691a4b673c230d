use clap::Parser;
use exam_ticker::{cli, config, display, error, export, list, search};
use exam_ticker_common::{ExamList, HeaderAliases, MergeSummary};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load()?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Find { schedule, codes, list: list_path, alias } => {
            println!("📅 exam-ticker - 試験検索\n");

            let alias_file = config.alias_file(alias);
            let aliases = HeaderAliases::with_custom_file(alias_file.as_deref())?;

            // 1. 読み込み・抽出
            println!("[1/2] 試験日程表を解析中...");
            let found = search::find_exams(&schedule, &codes, &aliases)?;
            println!("✔ {}件の試験が一致\n", found.len());

            // 2. 既存リストとマージ
            println!("[2/2] 試験リストと照合中...");
            let mut exam_list = match &list_path {
                Some(path) => list::load(path)?,
                None => ExamList::new(),
            };
            let existing_before = exam_list.len();
            let outcome = exam_list.merge(&found);
            let summary = MergeSummary::classify(found.len(), &outcome, existing_before);

            if let Some(path) = &list_path {
                if !outcome.added.is_empty() {
                    list::save(path, &exam_list)?;
                    println!("✔ リストを保存: {}", path.display());
                }
            }

            println!("\n{}\n", summary);
            display::print_cards(exam_list.exams(), today, config.soon_threshold_days);
        }

        Commands::Show { list: list_path } => {
            let exam_list = list::load_existing(&list_path)?;

            if exam_list.is_empty() {
                println!("リストに試験がありません");
            } else {
                println!("📅 試験リスト ({}件)\n", exam_list.len());
                display::print_cards(exam_list.exams(), today, config.soon_threshold_days);
            }
        }

        Commands::Remove { list: list_path, id } => {
            match list::remove_exam(&list_path, id.as_deref())? {
                Some(removed) => println!("✔ 削除しました: {}", display::summary_line(&removed)),
                None => println!("キャンセルしました"),
            }
        }

        Commands::Export { list: list_path, output, title } => {
            println!("📄 exam-ticker - エクスポート\n");

            let exam_list = list::load_existing(&list_path)?;
            let output_path = export::output_path_for_list(&list_path, output.as_deref());

            println!("- Excelを生成中...");
            export::excel::generate_excel(exam_list.exams(), &output_path, today, &title)?;
            println!("✔ Excel出力: {}", output_path.display());
        }

        Commands::Config { set_soon_days, set_alias_file, show } => {
            let mut config = config;

            if let Some(days) = set_soon_days {
                config.set_soon_threshold_days(days)?;
                println!("✔ 「まもなく」の日数を設定しました: {}日", days);
            }

            if let Some(path) = set_alias_file {
                config.set_alias_file(path)?;
                println!("✔ エイリアスファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  「まもなく」の日数: {}日", config.soon_threshold_days);
                println!(
                    "  エイリアスファイル: {}",
                    config
                        .alias_file(None)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
            }
        }
    }

    Ok(())
}

use crate::export::excel::DEFAULT_TITLE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exam-ticker")]
#[command(about = "試験日程表からクラスの試験を探して残り日数を表示するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 試験日程表からクラスコードの試験を探す
    Find {
        /// 試験日程表（.xlsx / .xls / .ods / .csv）
        #[arg(required = true)]
        schedule: PathBuf,

        /// クラスコード（カンマ区切り、例: "157324, 158785"）
        #[arg(short, long)]
        codes: String,

        /// 試験リストJSON（既存の試験と重複判定し、結果を保存）
        #[arg(short, long)]
        list: Option<PathBuf>,

        /// カスタムヘッダー別名ファイル（JSON）
        #[arg(long)]
        alias: Option<PathBuf>,
    },

    /// 保存済みの試験リストを表示
    Show {
        /// 試験リストJSON
        #[arg(required = true)]
        list: PathBuf,
    },

    /// 試験リストから試験を削除
    Remove {
        /// 試験リストJSON
        #[arg(required = true)]
        list: PathBuf,

        /// 削除する試験のid（省略時は対話式で選択）
        id: Option<String>,
    },

    /// 試験リストをExcelに出力
    Export {
        /// 試験リストJSON
        #[arg(required = true)]
        list: PathBuf,

        /// 出力ファイル/ディレクトリ（省略時: リストと同じ場所の .xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// シートのタイトル
        #[arg(short, long, default_value = DEFAULT_TITLE)]
        title: String,
    },

    /// 設定を表示/編集
    Config {
        /// 「まもなく」表示にする残り日数
        #[arg(long)]
        set_soon_days: Option<i64>,

        /// カスタムヘッダー別名ファイルを設定
        #[arg(long)]
        set_alias_file: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

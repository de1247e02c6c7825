use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "metadesc")]
#[command(about = "大学プログラムのPDFからメタディスクリプションを4件ずつ生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDF群（ZIPまたはフォルダ）からメタディスクリプションを生成
    Run {
        /// PDFを含むZIPファイル、またはPDFフォルダ
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル
        #[arg(short, long, default_value = "salida/metadescripciones.csv")]
        output: PathBuf,

        /// 文字数上限（Google Ads: 90 / SEO: 155）。省略時は設定値
        #[arg(short, long)]
        limit: Option<usize>,

        /// モデル名（例: gpt-4.1-mini）。省略時は OPENAI_MODEL → 設定値
        #[arg(short, long)]
        model: Option<String>,

        /// 出力形式 (csv/excel/json/all)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// システムプロンプトのファイル（LÍMITE_DE_CARACTERES を上限値に置換）
        #[arg(long)]
        system_prompt: Option<PathBuf>,
    },

    /// API を呼ばずに推定プログラム名と抜粋を確認
    Inspect {
        /// PDFを含むZIPファイル、またはPDFフォルダ
        #[arg(required = true)]
        input: PathBuf,

        /// 抜粋の最大文字数
        #[arg(long, default_value = "800")]
        max_chars: usize,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// APIキーを対話入力（画面に表示しない）
        #[arg(long, conflicts_with = "set_api_key")]
        prompt_api_key: bool,

        /// 既定のモデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 既定の文字数上限を設定
        #[arg(long)]
        set_limit: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Json,
    All,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "all" => Ok(ExportFormat::All),
            _ => Err(format!("Unknown format: {}. Use csv, excel, json, or all", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::All => write!(f, "all"),
        }
    }
}

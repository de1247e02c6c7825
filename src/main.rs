use clap::Parser;
use metadesc::analyzer::{self, OpenAiGenerator, PipelineOptions};
use metadesc::cli::{Cli, Commands};
use metadesc::config::Config;
use metadesc::error::{MetaDescError, Result};
use metadesc::export;
use metadesc::scanner::{InputSource, LopdfExtractor, TextExtractor};
use metadesc_common::{
    guess_program_name, normalize_extracted_text, summarize_signals, validate_template, OutputRow,
    DEFAULT_SYSTEM_PROMPT, LIMIT_PLACEHOLDER,
};

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Run { input, output, limit, model, format, system_prompt } => {
            println!("🚀 metadesc - メタディスクリプション生成\n");

            // APIキーがなければ処理前に終了
            let generator = OpenAiGenerator::from_config(&config)?;

            let char_limit = limit.unwrap_or(config.char_limit);
            if char_limit == 0 {
                return Err(MetaDescError::Config("文字数上限は1以上を指定してください".into()));
            }
            let model = config.resolve_model(model.as_deref());
            let template = match &system_prompt {
                Some(path) => {
                    let template = std::fs::read_to_string(path)?;
                    if !validate_template(&template)? {
                        log::warn!("{} に {} がありません", path.display(), LIMIT_PLACEHOLDER);
                    }
                    template
                }
                None => DEFAULT_SYSTEM_PROMPT.to_string(),
            };

            // 1. 入力スキャン
            println!("[1/3] PDFをスキャン中...");
            let mut source = InputSource::open(&input)?;
            let pdf_count = source.pdf_names().len();
            println!("✔ {}件のPDFを検出\n", pdf_count);

            // 2. 生成
            println!("[2/3] メタディスクリプション生成中... (モデル: {}, 上限: {}文字)", model, char_limit);
            let options = PipelineOptions::new(char_limit, model)
                .with_system_prompt(template)
                .with_verbose(cli.verbose);
            let outcome =
                analyzer::process_source(&mut source, &LopdfExtractor, &generator, &options).await?;
            println!(
                "✔ 生成完了: {}件（エラー {}件、テキストなし {}件）\n",
                outcome.results.len(),
                outcome.error_count(),
                outcome.skipped.len()
            );

            // 3. 出力
            println!("[3/3] 結果を保存中...");
            let rows: Vec<OutputRow> = outcome.results.iter().map(|r| r.to_row()).collect();
            for path in export::export_rows(&rows, format, &output)? {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Inspect { input, max_chars } => {
            println!("🔍 metadesc - 抽出内容の確認\n");

            let mut source = InputSource::open(&input)?;
            let names = source.pdf_names();
            if names.is_empty() {
                return Err(MetaDescError::NoDocumentsFound(input.display().to_string()));
            }

            for name in &names {
                let text = match source
                    .read(name)
                    .and_then(|data| LopdfExtractor.extract_text(&data))
                {
                    Ok(raw) => normalize_extracted_text(&raw),
                    Err(e) => {
                        println!("✖ {}: {}\n", name, e);
                        continue;
                    }
                };

                if text.is_empty() {
                    println!("- {}: テキストなし（スキップ対象）\n", name);
                    continue;
                }

                let program = guess_program_name(analyzer::base_name(name), &text);
                println!("■ {} → {}", name, program);
                println!("{}\n", summarize_signals(&text, max_chars));
            }
        }

        Commands::Config { set_api_key, prompt_api_key, set_model, set_limit, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if prompt_api_key {
                let key: String = dialoguer::Password::new()
                    .with_prompt("OpenAI APIキー")
                    .interact()
                    .map_err(|e| MetaDescError::Config(e.to_string()))?;
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.model = model;
                config.save()?;
                println!("✔ モデルを設定しました: {}", config.model);
            }

            if let Some(limit) = set_limit {
                if limit == 0 {
                    return Err(MetaDescError::Config("文字数上限は1以上を指定してください".into()));
                }
                config.char_limit = limit;
                config.save()?;
                println!("✔ 文字数上限を設定しました: {}", limit);
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  文字数上限: {}", config.char_limit);
                println!("  APIエンドポイント: {}", config.api_base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.api_key.is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

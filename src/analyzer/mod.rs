//! メタディスクリプション生成パイプライン
//!
//! PDF 1件ごとに: テキスト抽出 → 正規化 → プログラム名推定 → 抜粋 →
//! LLM生成 → 候補行パース → ルール適用 → 4件に補完。
//! 1件の失敗はエラー行として記録し、残りの処理は続ける。

mod openai;
mod types;

pub use openai::{parse_chat_response, OpenAiGenerator};
pub use types::{GenerationRequest, PipelineOptions};

use crate::error::Result;
use crate::scanner::{InputSource, TextExtractor};
use indicatif::{ProgressBar, ProgressStyle};
use metadesc_common::{
    dedupe_by_program, enforce_rules, guess_program_name, normalize_extracted_text,
    parse_candidate_lines, prefilter_candidates, summarize_signals, DescriptionSet,
    ProcessingResult,
};

/// 説明文候補の生成元（改行区切りのテキストを返す）
#[allow(async_fn_in_trait)]
pub trait DescriptionGenerator {
    async fn generate(&self, req: &GenerationRequest) -> Result<String>;
}

/// 一括処理の結果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// プログラム名で重複除去済み（最初の1件を残す）
    pub results: Vec<ProcessingResult>,
    /// テキストが空で読み飛ばしたファイル
    pub skipped: Vec<String>,
}

impl BatchOutcome {
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_error()).count()
    }
}

/// エントリ名からファイル名部分を取り出す（ZIP内は`/`区切り）
pub fn base_name(entry_name: &str) -> &str {
    entry_name.rsplit(['/', '\\']).next().unwrap_or(entry_name)
}

/// 1ドキュメントを処理
///
/// 抽出テキストが空なら`Ok(None)`（行を出力しない）。
pub async fn process_document<E, G>(
    entry_name: &str,
    data: &[u8],
    extractor: &E,
    generator: &G,
    options: &PipelineOptions,
) -> Result<Option<ProcessingResult>>
where
    E: TextExtractor,
    G: DescriptionGenerator,
{
    let raw = extractor.extract_text(data)?;
    let text = normalize_extracted_text(&raw);
    if text.is_empty() {
        return Ok(None);
    }

    let program = guess_program_name(base_name(entry_name), &text);
    let signals = summarize_signals(&text, options.summary_chars);
    log::debug!("{} → {} (抜粋 {}文字)", entry_name, program, signals.chars().count());

    let req = options.request_for(&program, signals);
    let response = generator.generate(&req).await?;

    let candidates = prefilter_candidates(parse_candidate_lines(&response), options.char_limit);
    let enforced = enforce_rules(&candidates, &program, options.char_limit);
    let descriptions = DescriptionSet::from_enforced(enforced, &program);

    Ok(Some(ProcessingResult::Described {
        program,
        descriptions,
        source_file: entry_name.to_string(),
    }))
}

fn progress_bar(len: usize, verbose: bool) -> ProgressBar {
    if verbose {
        // 詳細ログと描画が混ざらないように
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb
}

/// 入力元の全PDFを順番に処理
pub async fn process_source<E, G>(
    source: &mut InputSource,
    extractor: &E,
    generator: &G,
    options: &PipelineOptions,
) -> Result<BatchOutcome>
where
    E: TextExtractor,
    G: DescriptionGenerator,
{
    let names = source.pdf_names();
    let pb = progress_bar(names.len(), options.verbose);

    let mut results = Vec::new();
    let mut skipped = Vec::new();

    for name in &names {
        pb.set_message(base_name(name).to_string());

        let outcome = match source.read(name) {
            Ok(data) => process_document(name, &data, extractor, generator, options).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Some(result)) => results.push(result),
            Ok(None) => {
                log::info!("テキストなし、スキップ: {}", name);
                skipped.push(name.clone());
            }
            Err(e) => {
                log::warn!("{} の処理に失敗: {}", name, e);
                results.push(ProcessingResult::failed(name, e.to_string()));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(BatchOutcome {
        results: dedupe_by_program(results),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("carreras/medicina.pdf"), "medicina.pdf");
        assert_eq!(base_name("carreras\\derecho.pdf"), "derecho.pdf");
        assert_eq!(base_name("arquitectura.pdf"), "arquitectura.pdf");
    }
}

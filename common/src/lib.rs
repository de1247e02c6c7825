//! Metadesc Common Library
//!
//! CLIから利用される純粋ロジック（I/Oなし）:
//! テキスト整形、プログラム名推定、シグナル抽出、ルール適用、プロンプト生成、出力テーブル

pub mod types;
pub mod error;
pub mod text;
pub mod naming;
pub mod signals;
pub mod similarity;
pub mod rules;
pub mod prompts;
pub mod parser;
pub mod export;

pub use types::{DescriptionSet, ProcessingResult, OutputRow, dedupe_by_program};
pub use error::{Error, Result};
pub use text::normalize_extracted_text;
pub use naming::guess_program_name;
pub use signals::{summarize_signals, DEFAULT_SUMMARY_CHARS};
pub use similarity::{too_similar, dedupe_keep_first, SIMILARITY_THRESHOLD};
pub use rules::{enforce_rules, fill_with_fallback, fallback_description, prefilter_candidates};
pub use prompts::{
    build_system_prompt, build_user_prompt, validate_template, DEFAULT_SYSTEM_PROMPT,
    LIMIT_PLACEHOLDER,
};
pub use parser::parse_candidate_lines;

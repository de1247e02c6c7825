//! 説明文ルール適用モジュール
//!
//! AIが返した候補文を以下の順で整える:
//! 1. プログラム名が含まれていなければ先頭に付与
//! 2. 連続空白の圧縮
//! 3. 文字数上限での切り詰め
//! 4. 類似候補の除去（先勝ち）
//! 5. 4件未満なら直前の候補から変形して補充（重複したら打ち切り）

use crate::similarity::{dedupe_keep_first, too_similar};
use crate::text::{char_len, collapse_whitespace, truncate_to_limit};
use regex::Regex;

/// 1プログラムあたりの説明文数
pub const DESCRIPTIONS_PER_PROGRAM: usize = 4;

/// 補充時に置き換える語
pub const VARIATION_REPLACEMENT: &str = "Infórmate";

lazy_static::lazy_static! {
    static ref VARIATION_RE: Regex = Regex::new(r"(Conoce|Descubre|Explora)").unwrap();
}

/// 生成結果の事前フィルタ（空行と、既に上限を超えている行を除外）
pub fn prefilter_candidates(options: Vec<String>, limit: usize) -> Vec<String> {
    options
        .into_iter()
        .filter(|o| !o.is_empty())
        .filter(|o| char_len(o) <= limit)
        .collect()
}

/// 候補1件を整形（名前付与 → 空白圧縮 → 切り詰め）
pub fn clean_candidate(option: &str, program: &str, limit: usize) -> String {
    let with_name = if option.to_lowercase().contains(&program.to_lowercase()) {
        option.to_string()
    } else {
        format!("{}: {}", program, option)
    };
    let collapsed = collapse_whitespace(&with_name);
    truncate_to_limit(&collapsed, limit)
}

/// 直前の候補から補充用の変形を作る
fn make_variation(last: &str, limit: usize) -> String {
    let replaced = VARIATION_RE.replacen(last, 1, VARIATION_REPLACEMENT).into_owned();
    let variation = if replaced == last {
        format!("{}.", last)
    } else {
        replaced
    };
    truncate_to_limit(&variation, limit)
}

/// 候補にルールを適用し、最大4件を返す
///
/// 空入力は空のまま返す。4件に満たない場合の最終的な穴埋めは
/// 呼び出し側（[`fill_with_fallback`]）の責務。
pub fn enforce_rules<S: AsRef<str>>(options: &[S], program: &str, limit: usize) -> Vec<String> {
    let cleaned: Vec<String> = options
        .iter()
        .map(|o| clean_candidate(o.as_ref(), program, limit))
        .collect();

    let mut clean = dedupe_keep_first(&cleaned);

    while clean.len() < DESCRIPTIONS_PER_PROGRAM {
        let Some(last) = clean.last() else { break };
        let variation = make_variation(last, limit);
        if clean.iter().any(|k| too_similar(&variation, k)) {
            break;
        }
        clean.push(variation);
    }

    clean.truncate(DESCRIPTIONS_PER_PROGRAM);
    clean
}

/// 汎用の穴埋め文
pub fn fallback_description(program: &str) -> String {
    format!("{}: Descubre el plan de estudios y oportunidades. Conoce más.", program)
}

/// 4件になるまで汎用文で埋める（重複・文字数チェックはしない）
pub fn fill_with_fallback(mut options: Vec<String>, program: &str) -> Vec<String> {
    while options.len() < DESCRIPTIONS_PER_PROGRAM {
        options.push(fallback_description(program));
    }
    options
}

//! 類似度判定（単語集合のJaccard係数）
//!
//! 生成された説明文同士の重複を判定する。意味的な類似ではなく、
//! 小文字化した単語トークン（`\w+`）の集合の重なりで判断する。

use regex::Regex;
use std::collections::HashSet;

/// この値以上で「似すぎ」と判定
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

lazy_static::lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// 小文字化した単語トークンの集合
pub fn token_set(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Jaccard係数。どちらかのトークン集合が空なら`None`
pub fn jaccard(a: &str, b: &str) -> Option<f64> {
    let sa = token_set(a);
    let sb = token_set(b);
    if sa.is_empty() || sb.is_empty() {
        return None;
    }

    let intersection = sa.intersection(&sb).count();
    let union = sa.union(&sb).count();
    Some(intersection as f64 / union as f64)
}

/// 2つの文字列が似すぎているか
pub fn too_similar(a: &str, b: &str) -> bool {
    jaccard(a, b).is_some_and(|j| j >= SIMILARITY_THRESHOLD)
}

/// 先に出現したものを優先して、似すぎている候補を除外
pub fn dedupe_keep_first<S: AsRef<str>>(options: &[S]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for option in options {
        let option = option.as_ref();
        if kept.iter().any(|k| too_similar(option, k)) {
            continue;
        }
        kept.push(option.to_string());
    }
    kept
}

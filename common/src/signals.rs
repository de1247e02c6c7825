//! シグナル抽出モジュール
//!
//! パンフレット本文から、説明文生成の文脈として渡す抜粋を作る。
//! 見出しキーワードの直後を拾い、見つからなければ本文先頭を使う。

use crate::text::take_chars;
use regex::{Regex, RegexBuilder};

/// 抜粋の既定上限（文字数）
pub const DEFAULT_SUMMARY_CHARS: usize = 800;

/// 探索対象とする本文の上限
pub const SCAN_WINDOW_CHARS: usize = 20_000;

/// キーワード後に拾う文字数
pub const SECTION_SPAN_CHARS: usize = 400;

/// キーワードが1つも見つからないときに使う本文先頭の文字数
pub const FALLBACK_CHARS: usize = 3000;

/// 見出しキーワード（この順で連結）
pub const SECTION_LABELS: &[&str] = &[
    "perfil del egresado",
    "malla",
    "plan de estudios",
    "salidas",
    "campo laboral",
    "duración",
    "modalidad",
    "competencias",
    "por qué estudiar",
];

lazy_static::lazy_static! {
    static ref LABEL_RES: Vec<Regex> = SECTION_LABELS
        .iter()
        .map(|label| {
            RegexBuilder::new(&regex::escape(label))
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect();
}

/// キーワードに一致した位置から最大`SECTION_SPAN_CHARS`文字（改行含む）
fn find_section<'a>(re: &Regex, snippet: &'a str) -> Option<&'a str> {
    let m = re.find(snippet)?;
    let rest = &snippet[m.end()..];
    let tail = take_chars(rest, SECTION_SPAN_CHARS);
    Some(&snippet[m.start()..m.end() + tail.len()])
}

/// 見出しごとの抜粋（キーワード順）
pub fn find_sections(text: &str) -> Vec<&str> {
    let snippet = take_chars(text, SCAN_WINDOW_CHARS);
    LABEL_RES
        .iter()
        .filter_map(|re| find_section(re, snippet))
        .collect()
}

/// 生成用の文脈抜粋を作る
///
/// # Arguments
/// * `text` - 正規化済みの本文
/// * `max_chars` - 抜粋の上限文字数（通常は[`DEFAULT_SUMMARY_CHARS`]）
pub fn summarize_signals(text: &str, max_chars: usize) -> String {
    let sections = find_sections(text);
    let base = if sections.is_empty() {
        take_chars(take_chars(text, SCAN_WINDOW_CHARS), FALLBACK_CHARS).to_string()
    } else {
        sections.join("\n\n")
    };
    take_chars(&base, max_chars).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::char_len;

    #[test]
    fn test_sections_in_label_order() {
        let text = "Modalidad presencial.\nPerfil del egresado: líder innovador.";
        let sections = find_sections(text);
        assert_eq!(sections.len(), 2);
        // 出現順ではなくキーワード順
        assert!(sections[0].starts_with("Perfil del egresado"));
        assert!(sections[1].starts_with("Modalidad"));
        // 400文字以内なので末尾まで含む（改行も越える）
        assert_eq!(sections[1], text);
    }

    #[test]
    fn test_section_span_is_bounded() {
        let text = format!("Duración: {}", "x".repeat(1000));
        let sections = find_sections(&text);
        assert_eq!(sections.len(), 1);
        assert_eq!(char_len(sections[0]), "Duración".chars().count() + SECTION_SPAN_CHARS);
    }

    #[test]
    fn test_case_insensitive_accented_label() {
        let text = "DURACIÓN: 10 ciclos";
        assert_eq!(find_sections(text), vec!["DURACIÓN: 10 ciclos"]);
    }

    #[test]
    fn test_joined_with_blank_line() {
        let text = "malla curricular\nCampo laboral amplio";
        let summary = summarize_signals(text, DEFAULT_SUMMARY_CHARS);
        assert_eq!(
            summary,
            "malla curricular\nCampo laboral amplio\n\nCampo laboral amplio"
        );
    }

    #[test]
    fn test_fallback_to_text_head() {
        let text = "a".repeat(5000);
        let summary = summarize_signals(&text, 10_000);
        assert_eq!(char_len(&summary), FALLBACK_CHARS);
    }

    #[test]
    fn test_capped_to_max_chars() {
        let text = "ñ".repeat(2000);
        assert_eq!(char_len(&summarize_signals(&text, 800)), 800);
        assert_eq!(char_len(&summarize_signals(&text, 50)), 50);
    }

    #[test]
    fn test_labels_beyond_window_are_ignored() {
        let text = format!("{}modalidad virtual", "z".repeat(SCAN_WINDOW_CHARS));
        assert!(find_sections(&text).is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize_signals("", 800), "");
    }
}

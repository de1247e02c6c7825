//! テキスト整形ユーティリティ
//!
//! PDFから抽出したテキストの空白正規化と、文字数（Unicodeスカラー値）単位の切り詰め。

use regex::Regex;

lazy_static::lazy_static! {
    static ref INLINE_SPACE_RE: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref BLANK_LINES_RE: Regex = Regex::new(r"\n{2,}").unwrap();
    static ref MULTI_WHITESPACE_RE: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// 抽出テキストの空白を正規化
///
/// - スペース/タブの連続 → 半角スペース1つ
/// - 2行以上の改行 → 改行1つ
/// - 前後の空白を除去
pub fn normalize_extracted_text(text: &str) -> String {
    let text = INLINE_SPACE_RE.replace_all(text, " ");
    let text = BLANK_LINES_RE.replace_all(&text, "\n");
    text.trim().to_string()
}

/// 2文字以上続く空白（改行含む）を半角スペース1つにまとめ、前後を除去
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// 文字数（バイト数ではない）
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 先頭から`max_chars`文字までを返す（UTF-8境界を保証）
pub fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// `limit`文字を超える場合は切り詰めて末尾の空白を除去
pub fn truncate_to_limit(text: &str, limit: usize) -> String {
    if char_len(text) > limit {
        take_chars(text, limit).trim_end().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extracted_text() {
        let raw = "  Carrera de   Medicina\t\tHumana \n\n\nDuración: 7 años\n";
        assert_eq!(
            normalize_extracted_text(raw),
            "Carrera de Medicina Humana \nDuración: 7 años"
        );
    }

    #[test]
    fn test_normalize_joined_pages() {
        let joined = ["Página uno", "", "Página dos"].join("\n");
        assert_eq!(normalize_extracted_text(&joined), "Página uno\nPágina dos");
    }

    #[test]
    fn test_collapse_whitespace_keeps_single_tab() {
        // 1文字だけの空白はそのまま
        assert_eq!(collapse_whitespace("a\tb"), "a\tb");
        assert_eq!(collapse_whitespace("  a  \n b  "), "a b");
    }

    #[test]
    fn test_take_chars_multibyte() {
        assert_eq!(take_chars("Infórmate", 4), "Infó");
        assert_eq!(take_chars("abc", 10), "abc");
        assert_eq!(take_chars("", 3), "");
    }

    #[test]
    fn test_truncate_to_limit() {
        assert_eq!(truncate_to_limit("Medicina Humana", 9), "Medicina");
        assert_eq!(truncate_to_limit("Medicina", 20), "Medicina");
        assert_eq!(char_len(&truncate_to_limit("ñññññ", 3)), 3);
    }
}

//! APIレスポンスパーサー
//!
//! 生成APIの自由形式テキストから候補行を取り出す

/// 1レスポンスから採用する候補数の上限
pub const MAX_CANDIDATES: usize = 4;

/// レスポンスを行に分割し、空行を除いた先頭4行を返す
///
/// 番号や引用符の除去は行わない（プロンプト側で禁止している）。
///
/// # Examples
/// ```
/// use metadesc_common::parse_candidate_lines;
///
/// let response = "  Uno\n\nDos\n  \nTres\nCuatro\nCinco\n";
/// assert_eq!(parse_candidate_lines(response), vec!["Uno", "Dos", "Tres", "Cuatro"]);
/// ```
pub fn parse_candidate_lines(response: &str) -> Vec<String> {
    response
        .trim()
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .take(MAX_CANDIDATES)
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidate_lines_basic() {
        let response = "Medicina: estudia con los mejores\nMedicina: prácticas desde el primer año";
        let lines = parse_candidate_lines(response);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Medicina: prácticas desde el primer año");
    }

    #[test]
    fn test_parse_candidate_lines_crlf() {
        let lines = parse_candidate_lines("Uno\r\nDos\r\n");
        assert_eq!(lines, vec!["Uno", "Dos"]);
    }

    #[test]
    fn test_parse_candidate_lines_limit() {
        let response = (1..=6).map(|i| format!("Línea {}", i)).collect::<Vec<_>>().join("\n");
        let lines = parse_candidate_lines(&response);
        assert_eq!(lines.len(), MAX_CANDIDATES);
        assert_eq!(lines[3], "Línea 4");
    }

    #[test]
    fn test_parse_candidate_lines_empty() {
        assert!(parse_candidate_lines("").is_empty());
        assert!(parse_candidate_lines("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_numbering_is_kept() {
        let lines = parse_candidate_lines("1. Medicina Humana");
        assert_eq!(lines, vec!["1. Medicina Humana"]);
    }
}

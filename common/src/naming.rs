//! プログラム名推定モジュール
//!
//! ファイル名と本文の定型表現から、優先順位付きの候補を順に評価して
//! 最初に条件（6文字以上）を満たしたものを採用する。
//!
//! 優先順位:
//! 1. ファイル名（拡張子なし、`_`/`-`をスペースに）
//! 2. 「Carrera de / Escuela de / Programa de ...」
//! 3. 「Licenciatura en / Bachiller en ...」
//! 4. 本文先頭行（6〜40文字の文字列）

use crate::text::char_len;
use regex::Regex;
use std::path::Path;

/// 候補として採用する最小文字数
pub const MIN_NAME_CHARS: usize = 6;

/// 候補が1つもなく、ファイル名も空のときの名前
pub const DEFAULT_PROGRAM_NAME: &str = "Carrera";

lazy_static::lazy_static! {
    static ref STEM_SEPARATOR_RE: Regex = Regex::new(r"[_\-]+").unwrap();
    static ref SCHOOL_RE: Regex = Regex::new(
        r"(?i)(?:Carrera de|Escuela de|Programa de)\s+([A-Za-zÁÉÍÓÚáéíóúñÑ\s]+)"
    ).unwrap();
    static ref DEGREE_RE: Regex = Regex::new(
        r"(?:[Ll]icenciatura en|[Bb]achiller en)\s+([A-Za-zÁÉÍÓÚáéíóúñÑ\s]+)"
    ).unwrap();
    static ref HEADING_RE: Regex = Regex::new(
        r"(?i)^([A-Za-zÁÉÍÓÚáéíóúñÑ\s]{6,40})\s*\n"
    ).unwrap();
}

/// 候補抽出戦略（評価順）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    FileStem,
    SchoolPhrase,
    DegreePhrase,
    Heading,
}

impl NameStrategy {
    pub const ORDER: [NameStrategy; 4] = [
        NameStrategy::FileStem,
        NameStrategy::SchoolPhrase,
        NameStrategy::DegreePhrase,
        NameStrategy::Heading,
    ];

    /// この戦略で得られる候補（生の文字列）
    fn candidates(&self, stem: &str, text: &str) -> Vec<String> {
        match self {
            NameStrategy::FileStem => vec![stem.to_string()],
            NameStrategy::SchoolPhrase => captures(&SCHOOL_RE, text),
            NameStrategy::DegreePhrase => captures(&DEGREE_RE, text),
            NameStrategy::Heading => captures(&HEADING_RE, text).into_iter().take(1).collect(),
        }
    }
}

fn captures(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// ファイル名から正規化済みの語幹を得る
pub fn normalized_stem(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    STEM_SEPARATOR_RE.replace_all(&stem, " ").trim().to_string()
}

/// 単語ごとに先頭大文字・残り小文字へ
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 最初に条件を満たした候補を返す（見つからなければ`None`）
pub fn first_candidate(stem: &str, text: &str) -> Option<(NameStrategy, String)> {
    NameStrategy::ORDER.iter().find_map(|strategy| {
        strategy
            .candidates(stem, text)
            .into_iter()
            .map(|c| c.trim().to_string())
            .find(|c| char_len(c) >= MIN_NAME_CHARS)
            .map(|c| (*strategy, c))
    })
}

/// ファイル名と本文からプログラム名を推定
///
/// # Arguments
/// * `file_name` - PDFのファイル名（パスを含んでもよい）
/// * `text` - 正規化済みの本文
pub fn guess_program_name(file_name: &str, text: &str) -> String {
    let stem = normalized_stem(file_name);

    let name = match first_candidate(&stem, text) {
        Some((_, candidate)) => candidate,
        None if !stem.is_empty() => stem,
        None => DEFAULT_PROGRAM_NAME.to_string(),
    };

    title_case(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_stem() {
        assert_eq!(normalized_stem("medicina_humana.pdf"), "medicina humana");
        assert_eq!(normalized_stem("brochures/ing--civil_2024.PDF"), "ing civil 2024");
        assert_eq!(normalized_stem("_derecho_.pdf"), "derecho");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("MEDICINA  humana"), "Medicina Humana");
        assert_eq!(title_case("ingeniería de SISTEMAS"), "Ingeniería De Sistemas");
        assert_eq!(title_case("ñandú"), "Ñandú");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_file_stem_wins() {
        let text = "Carrera de Ingeniería Industrial\nmás texto";
        assert_eq!(guess_program_name("medicina_humana.pdf", text), "Medicina Humana");
    }

    #[test]
    fn test_school_phrase_when_stem_too_short() {
        let text = "Bienvenidos a la Carrera de Ingeniería Industrial, 10 ciclos.";
        let (strategy, candidate) = first_candidate("ii", text).unwrap();
        assert_eq!(strategy, NameStrategy::SchoolPhrase);
        assert_eq!(candidate, "Ingeniería Industrial");
        assert_eq!(guess_program_name("ii.pdf", text), "Ingeniería Industrial");
    }

    #[test]
    fn test_school_phrase_is_case_insensitive() {
        let text = "ESCUELA DE ARQUITECTURA, 2025";
        assert_eq!(guess_program_name("a1.pdf", text), "Arquitectura");
    }

    #[test]
    fn test_degree_phrase() {
        let text = "Obtén el grado de Bachiller en Psicología. Duración 5 años";
        let (strategy, candidate) = first_candidate("p", text).unwrap();
        assert_eq!(strategy, NameStrategy::DegreePhrase);
        assert_eq!(candidate, "Psicología");
    }

    #[test]
    fn test_heading_fallback() {
        let text = "Nutrición y Dietética\n2025 - admisión abierta";
        let (strategy, candidate) = first_candidate("x", text).unwrap();
        assert_eq!(strategy, NameStrategy::Heading);
        assert_eq!(candidate, "Nutrición y Dietética");
    }

    #[test]
    fn test_short_matches_are_skipped() {
        // "Arte" は6文字未満 → 次の戦略へ
        let text = "Carrera de Arte, 2025\n";
        assert_eq!(first_candidate("ab", text), None);
        assert_eq!(guess_program_name("ab.pdf", text), "Ab");
    }

    #[test]
    fn test_default_name_when_nothing_found() {
        assert_eq!(guess_program_name("__.pdf", "123"), DEFAULT_PROGRAM_NAME);
    }
}

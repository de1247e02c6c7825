//! 処理結果の型定義
//!
//! - DescriptionSet: 1プログラム分の説明文4件
//! - ProcessingResult: 1ドキュメントの処理結果（成功またはエラー行）
//! - OutputRow: 出力テーブルの1行

use crate::rules::{fill_with_fallback, DESCRIPTIONS_PER_PROGRAM};
use crate::text::char_len;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 1プログラム分の説明文（常に4件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionSet([String; DESCRIPTIONS_PER_PROGRAM]);

impl DescriptionSet {
    /// ルール適用済みの候補から作成（不足分は汎用文で補う）
    pub fn from_enforced(enforced: Vec<String>, program: &str) -> Self {
        let mut filled = fill_with_fallback(enforced, program).into_iter();
        Self(std::array::from_fn(|_| filled.next().unwrap_or_default()))
    }

    pub fn descriptions(&self) -> &[String] {
        &self.0
    }

    pub fn char_counts(&self) -> [usize; DESCRIPTIONS_PER_PROGRAM] {
        std::array::from_fn(|i| char_len(&self.0[i]))
    }
}

/// 1ドキュメントの処理結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ProcessingResult {
    Described {
        program: String,
        descriptions: DescriptionSet,
        source_file: String,
    },
    Failed {
        source_file: String,
        message: String,
    },
}

impl ProcessingResult {
    pub fn failed(source_file: &str, message: impl Into<String>) -> Self {
        ProcessingResult::Failed {
            source_file: source_file.to_string(),
            message: message.into(),
        }
    }

    /// 重複判定と出力に使うプログラム名（エラー行は「ERROR en ファイル名」）
    pub fn program(&self) -> String {
        match self {
            ProcessingResult::Described { program, .. } => program.clone(),
            ProcessingResult::Failed { source_file, .. } => format!("ERROR en {}", source_file),
        }
    }

    pub fn source_file(&self) -> &str {
        match self {
            ProcessingResult::Described { source_file, .. } => source_file,
            ProcessingResult::Failed { source_file, .. } => source_file,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProcessingResult::Failed { .. })
    }

    pub fn to_row(&self) -> OutputRow {
        match self {
            ProcessingResult::Described { program, descriptions, source_file } => {
                let d = descriptions.descriptions();
                let counts = descriptions.char_counts();
                OutputRow {
                    carrera: program.clone(),
                    descripcion_1: d[0].clone(),
                    descripcion_2: d[1].clone(),
                    descripcion_3: d[2].clone(),
                    descripcion_4: d[3].clone(),
                    caracteres_1: counts[0],
                    caracteres_2: counts[1],
                    caracteres_3: counts[2],
                    caracteres_4: counts[3],
                    archivo_origen: source_file.clone(),
                }
            }
            ProcessingResult::Failed { source_file, message } => OutputRow {
                carrera: self.program(),
                descripcion_1: message.clone(),
                archivo_origen: source_file.clone(),
                ..Default::default()
            },
        }
    }
}

/// 出力テーブルの1行（列名は出力ファイルのヘッダーと一致）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub carrera: String,
    pub descripcion_1: String,
    pub descripcion_2: String,
    pub descripcion_3: String,
    pub descripcion_4: String,
    pub caracteres_1: usize,
    pub caracteres_2: usize,
    pub caracteres_3: usize,
    pub caracteres_4: usize,
    pub archivo_origen: String,
}

/// 出力列の型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(usize),
}

impl OutputRow {
    pub const HEADERS: [&'static str; 10] = [
        "carrera",
        "descripcion_1",
        "descripcion_2",
        "descripcion_3",
        "descripcion_4",
        "caracteres_1",
        "caracteres_2",
        "caracteres_3",
        "caracteres_4",
        "archivo_origen",
    ];

    /// ヘッダー順のセル
    pub fn cells(&self) -> [Cell; 10] {
        [
            Cell::Text(self.carrera.clone()),
            Cell::Text(self.descripcion_1.clone()),
            Cell::Text(self.descripcion_2.clone()),
            Cell::Text(self.descripcion_3.clone()),
            Cell::Text(self.descripcion_4.clone()),
            Cell::Count(self.caracteres_1),
            Cell::Count(self.caracteres_2),
            Cell::Count(self.caracteres_3),
            Cell::Count(self.caracteres_4),
            Cell::Text(self.archivo_origen.clone()),
        ]
    }
}

/// プログラム名で重複除去（最初に処理したものを残す）
pub fn dedupe_by_program(results: Vec<ProcessingResult>) -> Vec<ProcessingResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|r| seen.insert(r.program()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn described(program: &str, file: &str) -> ProcessingResult {
        ProcessingResult::Described {
            program: program.to_string(),
            descriptions: DescriptionSet::from_enforced(vec![format!("{} ya", program)], program),
            source_file: file.to_string(),
        }
    }

    #[test]
    fn test_description_set_fills_to_four() {
        let set = DescriptionSet::from_enforced(vec!["Medicina ya".to_string()], "Medicina");
        assert_eq!(set.descriptions().len(), 4);
        assert_eq!(set.descriptions()[0], "Medicina ya");
        assert!(set.descriptions()[3].starts_with("Medicina: Descubre"));
        assert_eq!(set.char_counts()[0], 11);
    }

    #[test]
    fn test_description_set_keeps_first_four() {
        let many: Vec<String> = (1..=6).map(|i| format!("Derecho {}", i)).collect();
        let set = DescriptionSet::from_enforced(many, "Derecho");
        assert_eq!(set.descriptions()[3], "Derecho 4");
    }

    #[test]
    fn test_char_counts_are_chars_not_bytes() {
        let set = DescriptionSet::from_enforced(vec!["Psicología".to_string(); 4], "Psicología");
        assert_eq!(set.char_counts(), [10, 10, 10, 10]);
    }

    #[test]
    fn test_error_row() {
        let result = ProcessingResult::failed("docs/roto.pdf", "PDF読み込みエラー");
        assert!(result.is_error());
        let row = result.to_row();
        assert_eq!(row.carrera, "ERROR en docs/roto.pdf");
        assert_eq!(row.descripcion_1, "PDF読み込みエラー");
        assert_eq!(row.descripcion_2, "");
        assert_eq!(row.caracteres_1, 0);
        assert_eq!(row.archivo_origen, "docs/roto.pdf");
    }

    #[test]
    fn test_described_row() {
        let row = described("Medicina", "med.pdf").to_row();
        assert_eq!(row.carrera, "Medicina");
        assert_eq!(row.descripcion_1, "Medicina ya");
        assert_eq!(row.caracteres_1, 11);
        assert_eq!(row.archivo_origen, "med.pdf");
        assert_eq!(row.cells()[5], Cell::Count(11));
    }

    #[test]
    fn test_dedupe_by_program_keeps_first() {
        let results = vec![
            described("Medicina", "a.pdf"),
            described("Derecho", "b.pdf"),
            described("Medicina", "c.pdf"),
            ProcessingResult::failed("d.pdf", "x"),
            ProcessingResult::failed("d.pdf", "y"),
        ];
        let deduped = dedupe_by_program(results);
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0].source_file(), "a.pdf");
        assert_eq!(deduped[1].program(), "Derecho");
        assert_eq!(deduped[2].program(), "ERROR en d.pdf");
    }

    #[test]
    fn test_headers_match_fields() {
        let row = OutputRow::default();
        let json = serde_json::to_value(&row).unwrap();
        for header in OutputRow::HEADERS {
            assert!(json.get(header).is_some(), "列がない: {}", header);
        }
    }
}

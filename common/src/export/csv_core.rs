//! CSV生成（共通ライブラリ）
//!
//! カンマ区切り・UTF-8。カンマ/ダブルクォート/改行を含むフィールドは
//! ダブルクォートで囲み、内部のダブルクォートは二重化する。

use crate::types::{Cell, OutputRow};

/// フィールドをCSV用にエスケープ
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn cell_to_string(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => escape_field(text),
        Cell::Count(n) => n.to_string(),
    }
}

/// ヘッダー付きCSV文字列を生成
pub fn generate_csv_string(rows: &[OutputRow]) -> String {
    let mut out = OutputRow::HEADERS.join(",");
    out.push('\n');

    for row in rows {
        let line = row
            .cells()
            .iter()
            .map(cell_to_string)
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

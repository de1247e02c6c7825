//! JSON生成（共通ライブラリ）

use crate::error::Result;
use crate::types::OutputRow;

/// 出力行をJSON配列文字列に変換
pub fn generate_json_string(rows: &[OutputRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// JSON配列文字列から出力行を復元
pub fn parse_json_rows(json: &str) -> Result<Vec<OutputRow>> {
    Ok(serde_json::from_str(json)?)
}

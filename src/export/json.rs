use crate::error::Result;
use metadesc_common::export::json_core::generate_json_string;
use metadesc_common::OutputRow;
use std::path::Path;

/// 出力テーブルをJSON配列として保存
pub fn write_json(rows: &[OutputRow], output_path: &Path) -> Result<()> {
    let json = generate_json_string(rows)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

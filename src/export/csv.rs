//! CSV出力（UTF-8、ヘッダー付き）

use crate::error::Result;
use metadesc_common::export::csv_core::generate_csv_string;
use metadesc_common::OutputRow;
use std::path::Path;

pub fn write_csv(rows: &[OutputRow], output_path: &Path) -> Result<()> {
    let content = generate_csv_string(rows);
    std::fs::write(output_path, content)?;
    Ok(())
}

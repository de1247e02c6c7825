//! Excel出力（CLI版）
//!
//! バッファ生成は共通ライブラリの rust_xlsxwriter 実装を使う

use crate::error::{MetaDescError, Result};
use metadesc_common::export::excel_core::generate_excel_buffer;
use metadesc_common::OutputRow;
use std::path::Path;

pub fn write_excel(rows: &[OutputRow], output_path: &Path, sheet_name: &str) -> Result<()> {
    let buffer = generate_excel_buffer(rows, sheet_name).map_err(MetaDescError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}

//! Excel生成（共通ライブラリ）
//!
//! 出力テーブルを1シートのxlsxとしてバッファに生成する

use crate::types::{Cell, OutputRow};
use rust_xlsxwriter::*;

/// 列幅（文字数単位）
const TEXT_COL_WIDTH: f64 = 48.0;
const NAME_COL_WIDTH: f64 = 28.0;
const COUNT_COL_WIDTH: f64 = 13.0;

fn column_width(header: &str) -> f64 {
    if header.starts_with("descripcion_") {
        TEXT_COL_WIDTH
    } else if header.starts_with("caracteres_") {
        COUNT_COL_WIDTH
    } else {
        NAME_COL_WIDTH
    }
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `rows` - 出力行
/// * `sheet_name` - シート名
pub fn generate_excel_buffer(rows: &[OutputRow], sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_align(FormatAlign::Top)
        .set_text_wrap();

    let count_format = Format::new()
        .set_align(FormatAlign::Top)
        .set_align(FormatAlign::Center);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, header) in OutputRow::HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        worksheet.set_column_width(col, column_width(header))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string_with_format(excel_row, col, text.as_str(), &text_format)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
                Cell::Count(n) => {
                    worksheet.write_number_with_format(excel_row, col, *n as f64, &count_format)
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    if !rows.is_empty() {
        let last_col = (OutputRow::HEADERS.len() - 1) as u16;
        worksheet.autofilter(0, 0, rows.len() as u32, last_col)
            .map_err(|e| format!("フィルター設定エラー: {}", e))?;
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

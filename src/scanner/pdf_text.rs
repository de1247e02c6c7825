//! PDFテキスト抽出
//!
//! ページ単位で抽出し、失敗したページは読み飛ばす。
//! 空白の正規化は呼び出し側（`normalize_extracted_text`）で行う。

use crate::error::{MetaDescError, Result};
use lopdf::Document;

/// PDFのバイト列から生テキストを取り出す
pub trait TextExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}

/// lopdf による抽出
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl TextExtractor for LopdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let doc = Document::load_mem(data)
            .map_err(|e| MetaDescError::PdfExtraction(e.to_string()))?;

        let mut parts = Vec::new();
        for (page_num, _page_id) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(text) => parts.push(text),
                Err(e) => {
                    log::debug!("ページ {} の抽出をスキップ: {}", page_num, e);
                }
            }
        }

        Ok(parts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_is_error() {
        let result = LopdfExtractor.extract_text(b"%PDF-1.4 broken");
        assert!(matches!(result, Err(MetaDescError::PdfExtraction(_))));
    }

    #[test]
    fn test_empty_bytes_is_error() {
        assert!(LopdfExtractor.extract_text(&[]).is_err());
    }
}

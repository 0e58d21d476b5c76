//! 文本提取器 - 基础设施层
//!
//! 把原始文档字节变成按页排列的纯文本，只暴露"提取"的能力

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::error::ExtractionError;

/// 文本提取能力
///
/// 职责：
/// - 输入文档字节，输出每页一段文本
/// - 不认识学生 / 科目
/// - 不做任何行匹配
pub trait TextExtractor: Send + Sync {
    /// 提取每一页的文本
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// PDF 文本提取器（基于 pdf-extract）
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        // pdf-extract 遇到畸形文档可能直接 panic
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        match result {
            Ok(Ok(pages)) => {
                debug!("PDF 共提取 {} 页文本", pages.len());
                Ok(pages)
            }
            Ok(Err(e)) => Err(ExtractionError::PdfParsing(e.to_string())),
            Err(_) => Err(ExtractionError::Panicked),
        }
    }
}

/// 已提取文本的读取器
///
/// 页与页之间用换页符 `\x0c` 分隔
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.split('\x0c').map(str::to_string).collect())
    }
}

/// 根据扩展名选择提取器：`.txt` 按纯文本读取，其余一律按 PDF 处理
pub fn extractor_for(path: &Path) -> Box<dyn TextExtractor> {
    let is_text = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if is_text {
        Box::new(PlainTextExtractor)
    } else {
        Box::new(PdfTextExtractor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_splits_on_form_feed() {
        let pages = PlainTextExtractor
            .extract_pages(b"page one\nline two\x0cpage two")
            .unwrap();
        assert_eq!(pages, vec!["page one\nline two", "page two"]);
    }

    #[test]
    fn garbage_bytes_are_not_a_pdf() {
        let result = PdfTextExtractor.extract_pages(b"definitely not a pdf");
        assert!(result.is_err());
    }

    #[test]
    fn extractor_chosen_by_extension() {
        let pages = extractor_for(Path::new("dump.TXT"))
            .extract_pages(b"a\x0cb")
            .unwrap();
        assert_eq!(pages.len(), 2);

        assert!(extractor_for(Path::new("marksheet.pdf"))
            .extract_pages(b"a\x0cb")
            .is_err());
    }
}

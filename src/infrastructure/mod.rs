pub mod text_extractor;

pub use text_extractor::{extractor_for, PdfTextExtractor, PlainTextExtractor, TextExtractor};

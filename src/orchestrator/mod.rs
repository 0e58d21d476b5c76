//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! result_processor (读文件 / 提取 / 写文件)
//!     ↓
//! workflow::ResultFlow (解析 → 汇总 → Excel)
//!     ↓
//! services (能力层：line_parser / classifier / report_builder / workbook_writer)
//!     ↓
//! infrastructure (基础设施：TextExtractor)
//! ```
//!
//! 只有编排层接触文件系统。

pub mod result_processor;

pub use result_processor::App;

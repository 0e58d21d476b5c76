pub mod classifier;
pub mod line_parser;
pub mod report_builder;
pub mod summary_view;
pub mod workbook_writer;

pub use classifier::classify;
pub use line_parser::{classify_line, parse_pages, LineMatch};
pub use report_builder::{
    build_report, ClassDistribution, ComparisonRow, DetailRow, Report, StudentResult, SummaryRow,
    TOP_N,
};
pub use summary_view::DisplaySummary;
pub use workbook_writer::build_workbook;

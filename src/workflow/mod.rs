pub mod result_flow;

pub use result_flow::{ProcessedResult, ResultFlow};

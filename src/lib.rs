//! # Result Processor
//!
//! 从大学成绩单 PDF 中提取学生成绩，按学院规则判定等级，输出 Excel 和汇总表
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 把文档字节变成逐页文本，只暴露能力
//! - `TextExtractor` - PDF / 纯文本两种实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，全部是纯计算
//! - `line_parser` - 表头行 / 科目行两个独立匹配器
//! - `classifier` - 等级判定规则
//! - `report_builder` - 总分、百分比、前五名、等级分布
//! - `workbook_writer` - 生成 xlsx 字节
//! - `summary_view` - 展示用表格和 JSON
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份成绩单"的完整处理流程
//! - `ResultFlow` - 解析 → 汇总 → Excel
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/result_processor` - 读文件、提取文本、写出结果
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{PdfTextExtractor, PlainTextExtractor, TextExtractor};
pub use models::{Classification, StudentKey, StudentMap, SubjectCode, SubjectRecord, Year};
pub use orchestrator::App;
pub use services::{build_report, classify, parse_pages, Report};
pub use workflow::{ProcessedResult, ResultFlow};

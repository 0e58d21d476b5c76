//! 成绩处理流程 - 流程层
//!
//! 核心职责：定义"一份成绩单"的完整处理流程
//!
//! 流程顺序：
//! 1. 逐行解析 → 学生成绩
//! 2. 没有学生 → 报错，不生成任何输出
//! 3. 计算总分 / 百分比 / 等级 → 报表
//! 4. 报表 → Excel 字节

use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::{build_report, build_workbook, parse_pages, Report};

/// 流程产出
#[derive(Debug)]
pub struct ProcessedResult {
    pub report: Report,
    pub workbook: Vec<u8>,
}

/// 成绩处理流程
///
/// - 不持有任何资源，不做文件 I/O
/// - 只依赖业务能力（services）
pub struct ResultFlow {
    verbose_logging: bool,
}

impl ResultFlow {
    /// 创建新的处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn run<S: AsRef<str>>(&self, pages: &[S]) -> AppResult<ProcessedResult> {
        // ========== 1. 解析 ==========
        let students = parse_pages(pages);
        if students.is_empty() {
            return Err(AppError::NoStudentData);
        }
        info!("✓ 解析完成，共 {} 名学生", students.len());

        // ========== 2. 汇总 ==========
        let report = build_report(&students);
        if self.verbose_logging {
            log_students(&report);
        }

        // ========== 3. 生成 Excel ==========
        let workbook = build_workbook(&report)?;
        info!("✓ Excel 生成完成 ({} 字节)", workbook.len());

        Ok(ProcessedResult { report, workbook })
    }
}

fn log_students(report: &Report) {
    for student in &report.students {
        match (student.rounded_percentage(), student.classification) {
            (Some(percentage), Some(class)) => info!(
                "{} {} 科, 总分 {}, {:.2}%, {}",
                student.key,
                student.subjects.len(),
                student.total,
                percentage,
                class
            ),
            _ => info!(
                "{} {} 科, 总分 {}, ⚠️ 无法判断学年",
                student.key,
                student.subjects.len(),
                student.total
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;

    #[test]
    fn no_recognisable_lines_is_an_error() {
        let flow = ResultFlow::new(&Config::default());
        let result = flow.run(&["HEADER ONLY\nnothing to see"]);
        assert!(matches!(result, Err(AppError::NoStudentData)));
    }

    #[test]
    fn parses_and_builds_workbook() {
        let page = "PRN: 1 SEAT NO.: 1001 NAME: PATIL ROHAN Mother: SUNITA\n\
                    BED 101 CHILDHOOD 60 100 40 PASS\n\
                    BED 112 INTERNAL 60 100 40 PASS";
        let flow = ResultFlow::new(&Config {
            verbose_logging: true,
            ..Config::default()
        });
        let processed = flow.run(&[page]).unwrap();
        assert_eq!(processed.report.students.len(), 1);
        assert_eq!(
            processed.report.students[0].classification,
            Some(Classification::Fail)
        );
        assert_eq!(&processed.workbook[..2], b"PK");
    }
}

//! 汇总展示服务 - 业务能力层
//!
//! 把报表整理成展示用的表格：两个年级前五名、三组等级分布、一二年级对比。
//! 输出文本行或 JSON，不关心最终显示在哪里。

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::services::report_builder::{ClassDistribution, ComparisonRow, Report, SummaryRow};

/// 无等级学生在分布表中的标签
const UNCLASSIFIED_LABEL: &str = "(none)";

/// 展示用汇总数据
#[derive(Debug, Serialize)]
pub struct DisplaySummary<'a> {
    pub generated_at: String,
    pub student_count: usize,
    pub first_year_top: &'a [SummaryRow],
    pub second_year_top: &'a [SummaryRow],
    pub all_classes: &'a ClassDistribution,
    pub first_year_classes: &'a ClassDistribution,
    pub second_year_classes: &'a ClassDistribution,
    pub comparison: Vec<ComparisonRow>,
}

impl<'a> DisplaySummary<'a> {
    pub fn from_report(report: &'a Report, generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            student_count: report.students.len(),
            first_year_top: &report.first_year_top,
            second_year_top: &report.second_year_top,
            all_classes: &report.all_classes,
            first_year_classes: &report.first_year_classes,
            second_year_classes: &report.second_year_classes,
            comparison: report.comparison(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 全部表格的文本行
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.extend(render_top_table("🏆 First Year - Top 5 Students", self.first_year_top));
        lines.extend(render_top_table("🏆 Second Year - Top 5 Students", self.second_year_top));
        lines.extend(render_distribution("📊 Class Distribution (All Students)", self.all_classes));
        lines.extend(render_distribution("📊 Class Distribution — First Year", self.first_year_classes));
        lines.extend(render_distribution("📊 Class Distribution — Second Year", self.second_year_classes));
        lines.extend(render_comparison(&self.comparison));
        lines
    }
}

/// 前五名表格
pub fn render_top_table(title: &str, rows: &[SummaryRow]) -> Vec<String> {
    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.seat_no.clone(),
                r.name.clone(),
                r.total.to_string(),
                format!("{:.2}", r.percentage),
                r.class.label().to_string(),
            ]
        })
        .collect();
    titled(title, render_table(&["SEAT NO", "NAME", "Total", "Percentage", "Class"], body))
}

/// 等级分布表格；无等级的学生单独一行
pub fn render_distribution(title: &str, distribution: &ClassDistribution) -> Vec<String> {
    let mut body: Vec<Vec<String>> = distribution
        .iter()
        .map(|(class, n)| vec![class.label().to_string(), n.to_string()])
        .collect();
    if distribution.unclassified() > 0 {
        body.push(vec![
            UNCLASSIFIED_LABEL.to_string(),
            distribution.unclassified().to_string(),
        ]);
    }
    titled(title, render_table(&["Class", "Count"], body))
}

/// 一二年级对比表格
pub fn render_comparison(rows: &[ComparisonRow]) -> Vec<String> {
    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.class.label().to_string(),
                r.first_year.to_string(),
                r.second_year.to_string(),
            ]
        })
        .collect();
    titled(
        "📊 First Year vs Second Year — Side-by-Side Comparison",
        render_table(&["Class", "First Year", "Second Year"], body),
    )
}

fn titled(title: &str, table: Vec<String>) -> Vec<String> {
    let mut lines = vec![String::new(), title.to_string()];
    lines.extend(table);
    lines
}

/// 带 S.No 序号列的等宽文本表
fn render_table(headers: &[&str], rows: Vec<Vec<String>>) -> Vec<String> {
    let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    let mut header_row = vec!["S.No".to_string()];
    header_row.extend(headers.iter().map(|h| h.to_string()));
    table.push(header_row);
    for (i, row) in rows.into_iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(row);
        table.push(cells);
    }

    let columns = table[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            table
                .iter()
                .map(|row| row.get(c).map_or(0, |cell| cell.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines: Vec<String> = table
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect();

    let rule = widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>().join("-+-");
    lines.insert(1, rule);
    lines
}

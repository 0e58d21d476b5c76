//! 报表构建服务 - 业务能力层
//!
//! 把解析出的学生成绩汇总成明细表、两个年级的前五名和等级分布。
//! 本模块不做任何 I/O。

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::models::{Classification, StudentKey, StudentMap, SubjectRecord, Year};
use crate::services::classifier::classify;

/// 每个年级汇总表保留的人数
pub const TOP_N: usize = 5;

/// 单个学生的计算结果
#[derive(Debug, Clone)]
pub struct StudentResult {
    pub key: StudentKey,
    pub subjects: Vec<SubjectRecord>,
    pub total: u32,
    /// 由最后一个科目推断的学年
    pub year: Option<Year>,
    /// 未四舍五入的百分比，等级判定用它
    pub percentage: Option<f64>,
    pub classification: Option<Classification>,
}

impl StudentResult {
    /// 计算总分、百分比和等级
    pub fn evaluate(key: &StudentKey, subjects: &[SubjectRecord]) -> Self {
        let total = subjects.iter().map(|s| s.marks).sum::<u32>();
        let year = subjects.last().and_then(|s| Year::from_terminal(&s.code));
        let percentage = year.map(|y| f64::from(total) / y.divisor() * 100.0);
        let classification = percentage.map(|p| classify(subjects, p));

        Self {
            key: key.clone(),
            subjects: subjects.to_vec(),
            total,
            year,
            percentage,
            classification,
        }
    }

    /// 保留两位小数的百分比
    pub fn rounded_percentage(&self) -> Option<f64> {
        self.percentage.map(round2)
    }

    /// 明细表中属于该学生的行
    ///
    /// 座位号和姓名只写在第一行，总分、百分比、等级只写在最后一行。
    /// 没有任何科目的学生占一行。
    pub fn detail_rows(&self) -> Vec<DetailRow<'_>> {
        let mut rows: Vec<DetailRow<'_>> = if self.subjects.is_empty() {
            vec![DetailRow::default()]
        } else {
            self.subjects
                .iter()
                .map(|s| DetailRow {
                    subject: Some(s.code.as_str()),
                    marks: Some(s.marks),
                    ..Default::default()
                })
                .collect()
        };

        if let Some(first) = rows.first_mut() {
            first.seat_no = Some(self.key.seat_no.as_str());
            first.name = Some(self.key.name.as_str());
        }
        if let Some(last) = rows.last_mut() {
            last.total = Some(self.total);
            last.percentage = self.rounded_percentage();
            last.class = self.classification;
        }
        rows
    }

    fn summary_row(&self) -> Option<SummaryRow> {
        Some(SummaryRow {
            seat_no: self.key.seat_no.clone(),
            name: self.key.name.clone(),
            total: self.total,
            percentage: self.rounded_percentage()?,
            class: self.classification?,
        })
    }
}

/// 明细表的一行
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailRow<'a> {
    pub seat_no: Option<&'a str>,
    pub name: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub marks: Option<u32>,
    pub total: Option<u32>,
    pub percentage: Option<f64>,
    pub class: Option<Classification>,
}

/// 年级汇总表的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub seat_no: String,
    pub name: String,
    pub total: u32,
    pub percentage: f64,
    pub class: Classification,
}

/// 等级分布，按标签文字排序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassDistribution {
    counts: BTreeMap<Classification, usize>,
    /// 没有等级的学生数（末科目无法判断学年）
    unclassified: usize,
}

impl ClassDistribution {
    pub fn record(&mut self, class: Option<Classification>) {
        match class {
            Some(class) => *self.counts.entry(class).or_insert(0) += 1,
            None => self.unclassified += 1,
        }
    }

    pub fn count(&self, class: Classification) -> usize {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    pub fn unclassified(&self) -> usize {
        self.unclassified
    }

    /// 按标签顺序遍历（不含无等级）
    pub fn iter(&self) -> impl Iterator<Item = (Classification, usize)> + '_ {
        self.counts.iter().map(|(&class, &n)| (class, n))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.unclassified
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// 一、二年级并排对比的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub class: Classification,
    pub first_year: usize,
    pub second_year: usize,
}

/// 完整报表
#[derive(Debug, Clone)]
pub struct Report {
    pub students: Vec<StudentResult>,
    pub first_year_top: Vec<SummaryRow>,
    pub second_year_top: Vec<SummaryRow>,
    pub all_classes: ClassDistribution,
    pub first_year_classes: ClassDistribution,
    pub second_year_classes: ClassDistribution,
}

impl Report {
    /// 全部明细行，按学生顺序展开
    pub fn detail_rows(&self) -> Vec<DetailRow<'_>> {
        self.students.iter().flat_map(|s| s.detail_rows()).collect()
    }

    /// 一、二年级等级分布对比；缺失的等级补 0
    pub fn comparison(&self) -> Vec<ComparisonRow> {
        let classes: BTreeSet<Classification> = self
            .first_year_classes
            .iter()
            .chain(self.second_year_classes.iter())
            .map(|(class, _)| class)
            .collect();

        classes
            .into_iter()
            .map(|class| ComparisonRow {
                class,
                first_year: self.first_year_classes.count(class),
                second_year: self.second_year_classes.count(class),
            })
            .collect()
    }

    pub fn count_in_year(&self, year: Year) -> usize {
        self.students.iter().filter(|s| s.year == Some(year)).count()
    }
}

/// 构建报表
pub fn build_report(students: &StudentMap) -> Report {
    let results: Vec<StudentResult> = students
        .iter()
        .map(|(key, subjects)| StudentResult::evaluate(key, subjects))
        .collect();

    let mut first_year = Vec::new();
    let mut second_year = Vec::new();
    let mut all_classes = ClassDistribution::default();
    let mut first_year_classes = ClassDistribution::default();
    let mut second_year_classes = ClassDistribution::default();

    for result in &results {
        all_classes.record(result.classification);
        match result.year {
            Some(Year::First) => {
                first_year_classes.record(result.classification);
                first_year.extend(result.summary_row());
            }
            Some(Year::Second) => {
                second_year_classes.record(result.classification);
                second_year.extend(result.summary_row());
            }
            None => debug!("{} 末科目无法判断学年，不计算等级", result.key),
        }
    }

    Report {
        students: results,
        first_year_top: top_n(first_year),
        second_year_top: top_n(second_year),
        all_classes,
        first_year_classes,
        second_year_classes,
    }
}

/// 按百分比降序取前 N 名，同分保持原顺序
fn top_n(mut rows: Vec<SummaryRow>) -> Vec<SummaryRow> {
    rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    rows.truncate(TOP_N);
    rows
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! 等级判定服务 - 业务能力层
//!
//! 纯函数：输入一名学生的科目成绩和百分比，输出等级

use crate::models::{Classification, SubjectGroup, SubjectRecord};

/// 按分组拆开的分数
#[derive(Debug, Default)]
struct GroupedMarks {
    a: Vec<u32>,
    b: Vec<u32>,
    c: Vec<u32>,
    d: Vec<u32>,
}

impl GroupedMarks {
    fn from_records(records: &[SubjectRecord]) -> Self {
        let mut grouped = Self::default();
        for record in records {
            match record.code.group() {
                Some(SubjectGroup::A) => grouped.a.push(record.marks),
                Some(SubjectGroup::B) => grouped.b.push(record.marks),
                Some(SubjectGroup::C) => grouped.c.push(record.marks),
                Some(SubjectGroup::D) => grouped.d.push(record.marks),
                None => {}
            }
        }
        grouped
    }
}

/// 判定等级
///
/// 规则自上而下，命中即返回：
/// 1. 一年级规则（仅当 A 组非空）：A 组有 0 分 → Fail；A 组不及格超过 3 科 → Fail；
///    1~3 科 → ATKT；B 组有 0 分 → Fail in Internal
/// 2. 二年级规则：C 组有不及格 → Fail；D 组有 0 分 → Fail in Internal
/// 3. 按百分比：≥80 Distinction，≥65 First Class，≥55 Second Class，≥50 Pass，其余 Fail
///
/// 混合年级的记录按同样顺序判定，一年级规则优先。
pub fn classify(records: &[SubjectRecord], percentage: f64) -> Classification {
    let marks = GroupedMarks::from_records(records);

    // ---- 一年级规则 ----
    if !marks.a.is_empty() {
        if marks.a.iter().any(|&m| m == 0) {
            return Classification::Fail;
        }
        let below_50 = marks.a.iter().filter(|&&m| m < 50).count();
        if below_50 > 3 {
            return Classification::Fail;
        }
        if (1..=3).contains(&below_50) {
            return Classification::Atkt;
        }
        if marks.b.iter().any(|&m| m == 0) {
            return Classification::FailInInternal;
        }
    }

    // ---- 二年级规则 ----
    if marks.c.iter().any(|&m| m < 50) {
        return Classification::Fail;
    }
    if marks.d.iter().any(|&m| m == 0) {
        return Classification::FailInInternal;
    }

    by_percentage(percentage)
}

fn by_percentage(percentage: f64) -> Classification {
    if percentage >= 80.0 {
        Classification::Distinction
    } else if percentage >= 65.0 {
        Classification::FirstClass
    } else if percentage >= 55.0 {
        Classification::SecondClass
    } else if percentage >= 50.0 {
        Classification::Pass
    } else {
        Classification::Fail
    }
}

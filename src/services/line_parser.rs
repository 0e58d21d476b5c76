//! 行解析服务 - 业务能力层
//!
//! 逐行扫描每页文本，用两个互相独立的匹配器识别：
//! 1. 学生表头行（`PRN:` 开头，含座位号和姓名）
//! 2. 科目成绩行（`BED xxx` 开头，含分数）
//!
//! 行按原样匹配，不做首尾去空白：缩进的表头或科目行不会被识别。
//! 模式里的数字只认 ASCII `0-9`，其它文字的数字不算。

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{StudentKey, StudentMap, SubjectCode, SubjectRecord};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"SEAT NO\.:\s*([0-9]+)\s+NAME:\s*(.*?)\s+Mother").expect("表头正则有效")
});

static SUBJECT_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(BED\s+[0-9]{3}(?:-[0-9]{2})?)\s+.*\s([0-9]{2,3})\s+[0-9]+\s+[0-9]+\s+\w+")
        .expect("科目行正则有效")
});

/// 单行的匹配结果，两个匹配器各自独立
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMatch {
    pub header: Option<StudentKey>,
    pub subject: Option<SubjectRecord>,
}

/// 对单行做分类
pub fn classify_line(line: &str) -> LineMatch {
    LineMatch {
        header: match_header(line),
        subject: match_subject_row(line),
    }
}

/// 表头匹配器
fn match_header(line: &str) -> Option<StudentKey> {
    if !line.starts_with("PRN:") {
        return None;
    }
    let caps = HEADER_RE.captures(line)?;
    Some(StudentKey::new(caps[1].trim(), caps[2].trim()))
}

/// 科目行匹配器
fn match_subject_row(line: &str) -> Option<SubjectRecord> {
    let caps = SUBJECT_ROW_RE.captures(line)?;
    let code = SubjectCode::parse(&caps[1])?;
    let marks = caps[2].parse().ok()?;
    Some(SubjectRecord::new(code, marks))
}

/// 解析过程中的累加器
///
/// 持有"当前学生"游标，只在一次解析调用内有效
#[derive(Debug, Default)]
struct ParseState {
    students: StudentMap,
    current: Option<StudentKey>,
    dropped_rows: usize,
}

impl ParseState {
    fn feed(&mut self, line: &str) {
        let LineMatch { header, subject } = classify_line(line);

        if let Some(key) = header {
            // 同名同座位号重复出现时覆盖旧记录，位置不变
            if self.students.insert(key.clone(), Vec::new()).is_some() {
                debug!("{} 重复出现，之前的科目记录被覆盖", key);
            }
            self.current = Some(key);
        }

        if let Some(record) = subject {
            match self.current.as_ref().and_then(|key| self.students.get_mut(key)) {
                Some(records) => records.push(record),
                None => {
                    debug!("跳过表头之前的科目行: {}", record.code);
                    self.dropped_rows += 1;
                }
            }
        }
    }
}

/// 解析全部页面文本
///
/// 不匹配任何模式的行直接忽略；科目行归属到最近一次出现的表头，可以跨页
pub fn parse_pages<S: AsRef<str>>(pages: &[S]) -> StudentMap {
    let mut state = ParseState::default();

    for page in pages {
        let text = page.as_ref();
        if text.trim().is_empty() {
            continue;
        }
        for line in text.lines() {
            state.feed(line);
        }
    }

    debug!(
        "解析完成: {} 名学生, 丢弃 {} 行无归属科目",
        state.students.len(),
        state.dropped_rows
    );

    state.students
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "PRN: 2023016400123456 SEAT NO.: 1001 NAME: PATIL ROHAN SURESH Mother: SUNITA";

    #[test]
    fn header_line_yields_seat_and_name() {
        let m = classify_line(HEADER);
        assert_eq!(m.header, Some(StudentKey::new("1001", "PATIL ROHAN SURESH")));
        assert_eq!(m.subject, None);
    }

    #[test]
    fn header_requires_prn_prefix() {
        let line = "SEAT NO.: 1001 NAME: PATIL ROHAN Mother: SUNITA";
        assert_eq!(classify_line(line).header, None);
    }

    #[test]
    fn header_without_mother_is_ignored() {
        let line = "PRN: 20230164 SEAT NO.: 1001 NAME: PATIL ROHAN";
        assert_eq!(classify_line(line).header, None);
    }

    #[test]
    fn subject_row_takes_marks_before_two_counts_and_a_word() {
        let m = classify_line("BED 101 CHILDHOOD AND GROWING UP 60 100 40 PASS");
        let record = m.subject.unwrap();
        assert_eq!(record.code.as_str(), "BED101");
        assert_eq!(record.marks, 60);
    }

    #[test]
    fn subject_row_with_paper_suffix() {
        let m = classify_line("BED 104-02 PEDAGOGY OF SCIENCE 075 100 40 PASS");
        let record = m.subject.unwrap();
        assert_eq!(record.code.as_str(), "BED104-02");
        assert_eq!(record.marks, 75);
    }

    #[test]
    fn subject_row_needs_code_at_line_start() {
        assert_eq!(classify_line("TOTAL BED 101 60 100 40 PASS").subject, None);
        assert_eq!(classify_line("BED 101 CHILDHOOD 60 100 PASS").subject, None);
    }

    #[test]
    fn indented_lines_are_not_matched() {
        assert_eq!(classify_line("  BED 101 CHILDHOOD 60 100 40 PASS").subject, None);
        assert_eq!(classify_line(&format!(" {}", HEADER)).header, None);

        let page = format!("{}\n   BED 101 CHILDHOOD 60 100 40 PASS", HEADER);
        let students = parse_pages(&[page]);
        assert!(students[0].is_empty());
    }

    #[test]
    fn trailing_whitespace_does_not_block_a_match() {
        let m = classify_line("BED 101 CHILDHOOD 60 100 40 PASS   \r");
        assert_eq!(m.subject.unwrap().marks, 60);
    }

    #[test]
    fn non_ascii_digits_are_not_matched() {
        // 天城文数字
        assert_eq!(classify_line("BED 101 CHILDHOOD 60 १०० ४० PASS").subject, None);
        assert_eq!(classify_line("BED 101 CHILDHOOD ६० 100 40 PASS").subject, None);
        let header = "PRN: 2023 SEAT NO.: १००१ NAME: PATIL ROHAN Mother: SUNITA";
        assert_eq!(classify_line(header).header, None);
    }

    #[test]
    fn rows_before_any_header_are_dropped() {
        let page = format!(
            "BED 101 CHILDHOOD 60 100 40 PASS\n{}\nBED 102 CONTEMPORARY INDIA 55 100 40 PASS",
            HEADER
        );
        let students = parse_pages(&[page]);
        assert_eq!(students.len(), 1);
        let records = &students[&StudentKey::new("1001", "PATIL ROHAN SURESH")];
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code.as_str(), "BED102");
    }

    #[test]
    fn rows_follow_latest_header_across_pages() {
        let first = format!(
            "UNIVERSITY OF PUNE\n{}\nBED 101 CHILDHOOD 60 100 40 PASS",
            HEADER
        );
        let second = "BED 102 CONTEMPORARY INDIA 70 100 40 PASS\n\
             PRN: 2023016400999 SEAT NO.: 1002 NAME: JOSHI ANITA Mother: MEENA\n\
             BED 101 CHILDHOOD 45 100 40 PASS"
            .to_string();

        let students = parse_pages(&[first, String::new(), second]);
        let keys: Vec<&str> = students.keys().map(|k| k.seat_no.as_str()).collect();
        assert_eq!(keys, vec!["1001", "1002"]);

        let rohan = &students[0];
        assert_eq!(rohan.len(), 2);
        assert_eq!(rohan[1].marks, 70);
        let anita = &students[1];
        assert_eq!(anita.len(), 1);
        assert_eq!(anita[0].marks, 45);
    }

    #[test]
    fn repeated_header_overwrites_records_in_place() {
        let page = format!(
            "{h}\nBED 101 CHILDHOOD 60 100 40 PASS\n\
             PRN: 99 SEAT NO.: 1002 NAME: JOSHI ANITA Mother: MEENA\n\
             {h}\nBED 102 CONTEMPORARY INDIA 80 100 40 PASS",
            h = HEADER
        );
        let students = parse_pages(&[page]);
        assert_eq!(students.len(), 2);
        let (first_key, first_records) = students.get_index(0).unwrap();
        assert_eq!(first_key.seat_no, "1001");
        assert_eq!(first_records.len(), 1);
        assert_eq!(first_records[0].marks, 80);
        assert!(students[1].is_empty());
    }

    #[test]
    fn unrecognised_text_yields_nothing() {
        let students = parse_pages(&["Result sheet\nPage 1 of 3\n\n"]);
        assert!(students.is_empty());
    }
}

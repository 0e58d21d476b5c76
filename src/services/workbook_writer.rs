//! Excel 输出服务 - 业务能力层
//!
//! 只负责把报表写成 xlsx 字节，不落盘

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};

use crate::services::report_builder::{Report, SummaryRow};

const ALL_STUDENTS_SHEET: &str = "All_Students";
const FIRST_YEAR_SHEET: &str = "First Year";
const SECOND_YEAR_SHEET: &str = "Second Year";

const DETAIL_HEADERS: [&str; 7] = ["SEAT NO", "NAME", "Subject", "Marks", "Total", "Percentage", "Class"];
const SUMMARY_HEADERS: [&str; 5] = ["SEAT NO", "NAME", "Total", "Percentage", "Class"];

const PERCENTAGE_FORMAT: &str = "0.00";

/// 生成工作簿字节
pub fn build_workbook(report: &Report) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    write_detail_sheet(workbook.add_worksheet(), report)?;
    write_summary_sheet(workbook.add_worksheet(), FIRST_YEAR_SHEET, &report.first_year_top)?;
    write_summary_sheet(workbook.add_worksheet(), SECOND_YEAR_SHEET, &report.second_year_top)?;

    workbook.save_to_buffer()
}

/// 明细表：每科一行，座位号与姓名按学生合并居中
fn write_detail_sheet(sheet: &mut Worksheet, report: &Report) -> Result<(), XlsxError> {
    sheet.set_name(ALL_STUDENTS_SHEET)?;
    write_headers(sheet, &DETAIL_HEADERS)?;

    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let percent = Format::new().set_num_format(PERCENTAGE_FORMAT);

    let mut row: u32 = 1;
    for student in &report.students {
        let rows = student.detail_rows();
        let start = row;
        let end = start + rows.len() as u32 - 1;

        // 单行不能合并
        if end > start {
            sheet.merge_range(start, 0, end, 0, &student.key.seat_no, &centered)?;
            sheet.merge_range(start, 1, end, 1, &student.key.name, &centered)?;
        } else {
            sheet.write_string_with_format(start, 0, &student.key.seat_no, &centered)?;
            sheet.write_string_with_format(start, 1, &student.key.name, &centered)?;
        }

        for detail in &rows {
            if let Some(subject) = detail.subject {
                sheet.write_string(row, 2, subject)?;
            }
            if let Some(marks) = detail.marks {
                sheet.write_number(row, 3, f64::from(marks))?;
            }
            if let Some(total) = detail.total {
                sheet.write_number(row, 4, f64::from(total))?;
            }
            if let Some(percentage) = detail.percentage {
                sheet.write_number_with_format(row, 5, percentage, &percent)?;
            }
            if let Some(class) = detail.class {
                sheet.write_string(row, 6, class.label())?;
            }
            row += 1;
        }
    }

    Ok(())
}

/// 年级前五名
fn write_summary_sheet(sheet: &mut Worksheet, name: &str, rows: &[SummaryRow]) -> Result<(), XlsxError> {
    sheet.set_name(name)?;
    write_headers(sheet, &SUMMARY_HEADERS)?;

    let percent = Format::new().set_num_format(PERCENTAGE_FORMAT);
    for (i, summary) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &summary.seat_no)?;
        sheet.write_string(row, 1, &summary.name)?;
        sheet.write_number(row, 2, f64::from(summary.total))?;
        sheet.write_number_with_format(row, 3, summary.percentage, &percent)?;
        sheet.write_string(row, 4, summary.class.label())?;
    }

    Ok(())
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StudentKey, StudentMap, SubjectCode, SubjectRecord};
    use crate::services::report_builder::build_report;

    fn sample_report() -> Report {
        let mut students = StudentMap::new();
        students.insert(
            StudentKey::new("1001", "PATIL ROHAN"),
            (101..=112)
                .map(|n| SubjectRecord::new(SubjectCode::parse(&format!("BED{}", n)).unwrap(), 60))
                .collect(),
        );
        students.insert(
            StudentKey::new("1002", "ONE SUBJECT"),
            vec![SubjectRecord::new(SubjectCode::parse("BED206").unwrap(), 60)],
        );
        students.insert(StudentKey::new("1003", "NO SUBJECTS"), Vec::new());
        build_report(&students)
    }

    #[test]
    fn workbook_is_a_zip_container() {
        let bytes = build_workbook(&sample_report()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_report_still_has_all_sheets() {
        let report = build_report(&StudentMap::new());
        let bytes = build_workbook(&report).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}

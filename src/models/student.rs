use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::models::subject::SubjectCode;

/// 学生标识（座位号 + 姓名）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StudentKey {
    pub seat_no: String,
    pub name: String,
}

impl StudentKey {
    pub fn new(seat_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seat_no: seat_no.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for StudentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[座位号 {} {}]", self.seat_no, self.name)
    }
}

/// 单科成绩
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub code: SubjectCode,
    pub marks: u32,
}

impl SubjectRecord {
    pub fn new(code: SubjectCode, marks: u32) -> Self {
        Self { code, marks }
    }
}

/// 按文档顺序保存的全部学生成绩
pub type StudentMap = IndexMap<StudentKey, Vec<SubjectRecord>>;

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// 成绩等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Fail,
    #[serde(rename = "ATKT")]
    Atkt,
    #[serde(rename = "Fail in Internal")]
    FailInInternal,
    Distinction,
    #[serde(rename = "First Class")]
    FirstClass,
    #[serde(rename = "Second Class")]
    SecondClass,
    Pass,
}

impl Classification {
    /// 报表里显示的标签
    pub fn label(self) -> &'static str {
        match self {
            Classification::Fail => "Fail",
            Classification::Atkt => "ATKT",
            Classification::FailInInternal => "Fail in Internal",
            Classification::Distinction => "Distinction",
            Classification::FirstClass => "First Class",
            Classification::SecondClass => "Second Class",
            Classification::Pass => "Pass",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// 统计表按标签文字排序
impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use phf::phf_map;
use std::fmt;

/// 学年
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Year {
    /// 一年级（末科目以 112 结尾）
    #[serde(rename = "First Year")]
    First,
    /// 二年级（末科目以 212 结尾）
    #[serde(rename = "Second Year")]
    Second,
}

// 末科目编号 -> 学年
static TERMINAL_YEAR_MAP: phf::Map<&'static str, Year> = phf_map! {
    "112" => Year::First,
    "212" => Year::Second,
};

impl Year {
    /// 从末科目推断学年
    pub fn from_terminal(code: &SubjectCode) -> Option<Self> {
        TERMINAL_YEAR_MAP.get(code.tail()).copied()
    }

    /// 百分比计算用的满分
    pub fn divisor(self) -> f64 {
        match self {
            Year::First => 1000.0,
            Year::Second => 2000.0,
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Year::First => "First Year",
            Year::Second => "Second Year",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 规则判定用的科目分组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectGroup {
    /// 一年级理论科目（BED10x，编号 ≤ 107）
    A,
    /// 一年级内部考核（BED10x，编号 108..=112）
    B,
    /// 二年级理论科目（BED20x，编号 ≤ 205）
    C,
    /// 二年级内部考核（BED20x，编号 206..=212）
    D,
}

/// 科目代码
///
/// 形如 `BED101` 或 `BED101-01`，空白已去除。
/// 分组和学年判断都看完整代码的末三位字符：`BED206-01` 的末三位是 `-01`，
/// 数值为 -1，因此落入理论科目一侧，也不会被当作末科目。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectCode {
    code: String,
    number: u16,
    tail_value: i32,
}

impl SubjectCode {
    /// 解析科目代码，允许 `BED` 与编号之间有空白
    pub fn parse(raw: &str) -> Option<Self> {
        let code: String = raw.split_whitespace().collect();
        let digits = code.strip_prefix("BED")?;
        let (number, suffix) = match digits.split_once('-') {
            Some((number, suffix)) => (number, Some(suffix)),
            None => (digits, None),
        };

        if number.len() != 3 || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if let Some(suffix) = suffix {
            if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        }

        let tail_value = code[code.len() - 3..].parse().ok()?;
        Some(Self {
            number: number.parse().ok()?,
            tail_value,
            code,
        })
    }

    /// 完整代码（含后缀）
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// 三位科目编号
    pub fn number(&self) -> u16 {
        self.number
    }

    /// 代码末三位字符（带后缀时为 `-NN`）
    fn tail(&self) -> &str {
        &self.code[self.code.len() - 3..]
    }

    /// 判断所属分组，按字面前缀 `BED10` / `BED20` 匹配，编号取末三位的数值
    pub fn group(&self) -> Option<SubjectGroup> {
        let n = self.tail_value;
        if self.code.starts_with("BED10") {
            if n <= 107 {
                return Some(SubjectGroup::A);
            }
            if (108..=112).contains(&n) {
                return Some(SubjectGroup::B);
            }
        } else if self.code.starts_with("BED20") {
            if n <= 205 {
                return Some(SubjectGroup::C);
            }
            if (206..=212).contains(&n) {
                return Some(SubjectGroup::D);
            }
        }
        None
    }
}

impl fmt::Display for SubjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> SubjectCode {
        SubjectCode::parse(raw).unwrap()
    }

    #[test]
    fn parse_removes_whitespace_and_keeps_suffix() {
        let c = code("BED  104-02");
        assert_eq!(c.as_str(), "BED104-02");
        assert_eq!(c.number(), 104);
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert!(SubjectCode::parse("BED 10").is_none());
        assert!(SubjectCode::parse("BSC 101").is_none());
        assert!(SubjectCode::parse("BED 101-1").is_none());
        assert!(SubjectCode::parse("BED 1O1").is_none());
    }

    #[test]
    fn groups_follow_literal_prefixes() {
        assert_eq!(code("BED101").group(), Some(SubjectGroup::A));
        assert_eq!(code("BED107").group(), Some(SubjectGroup::A));
        assert_eq!(code("BED108").group(), Some(SubjectGroup::B));
        assert_eq!(code("BED109").group(), Some(SubjectGroup::B));
        // BED11x 不以 BED10 开头
        assert_eq!(code("BED110").group(), None);
        assert_eq!(code("BED112").group(), None);
        assert_eq!(code("BED205").group(), Some(SubjectGroup::C));
        assert_eq!(code("BED206").group(), Some(SubjectGroup::D));
        assert_eq!(code("BED212").group(), None);
        assert_eq!(code("BED301").group(), None);
    }

    #[test]
    fn suffixed_codes_group_by_their_last_three_chars() {
        // 末三位 "-01" / "-02" 取值为负数
        assert_eq!(code("BED104-02").group(), Some(SubjectGroup::A));
        assert_eq!(code("BED108-01").group(), Some(SubjectGroup::A));
        assert_eq!(code("BED206-01").group(), Some(SubjectGroup::C));
        assert_eq!(code("BED110-01").group(), None);
        assert_eq!(code("BED301-01").group(), None);
    }

    #[test]
    fn terminal_year_lookup() {
        assert_eq!(Year::from_terminal(&code("BED112")), Some(Year::First));
        assert_eq!(Year::from_terminal(&code("BED 212")), Some(Year::Second));
        assert_eq!(Year::from_terminal(&code("BED112-01")), None);
        assert_eq!(Year::from_terminal(&code("BED212-01")), None);
        assert_eq!(Year::from_terminal(&code("BED206")), None);
        assert_eq!(Year::First.divisor(), 1000.0);
        assert_eq!(Year::Second.divisor(), 2000.0);
    }
}

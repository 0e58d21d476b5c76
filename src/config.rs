use std::path::PathBuf;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理的成绩单文件（PDF，或已提取的 .txt 文本）
    pub input_path: PathBuf,
    /// 输出的 Excel 文件
    pub output_xlsx: PathBuf,
    /// 汇总数据 JSON 输出路径（可选）
    pub summary_json: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("marksheet.pdf"),
            output_xlsx: PathBuf::from("all_final_result.xlsx"),
            summary_json: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_path: std::env::var("INPUT_FILE").map(PathBuf::from).unwrap_or(default.input_path),
            output_xlsx: std::env::var("OUTPUT_XLSX").map(PathBuf::from).unwrap_or(default.output_xlsx),
            summary_json: std::env::var("SUMMARY_JSON").ok().map(PathBuf::from).or(default.summary_json),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

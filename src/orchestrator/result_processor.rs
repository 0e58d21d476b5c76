//! 成绩单处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次运行中所有的 I/O：
//!
//! 1. **读取**：读取成绩单文件
//! 2. **提取**：在阻塞线程上提取每页文本
//! 3. **委托**：交给 `ResultFlow` 解析、汇总、生成 Excel
//! 4. **输出**：写出 Excel、可选的汇总 JSON，并打印展示表格
//!
//! 每次运行只处理一份文档，运行之间没有任何共享状态。

use std::path::{Path, PathBuf};
use std::time::Instant;

use tokio::fs;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, ExtractionError};
use crate::infrastructure::extractor_for;
use crate::models::Year;
use crate::services::{DisplaySummary, Report};
use crate::utils::logging::{log_startup, print_final_stats, RunStats};
use crate::workflow::ResultFlow;

/// 应用主结构
pub struct App {
    config: Config,
    flow: ResultFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let flow = ResultFlow::new(&config);
        Self { config, flow }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<Report> {
        let started = Instant::now();
        let input = &self.config.input_path;
        log_startup(input);

        // 读取文件
        let bytes = fs::read(input)
            .await
            .map_err(|e| AppError::file_read_failed(input.display().to_string(), e))?;
        info!("✓ 已读取 {} 字节", bytes.len());

        // 提取文本；提取失败与"没有学生"同样处理
        let pages = match extract_pages(input.clone(), bytes).await {
            Ok(pages) => pages,
            Err(e) => {
                error!("文本提取失败: {}", e);
                Vec::new()
            }
        };
        info!("📄 共 {} 页文本", pages.len());

        // 解析、汇总、生成 Excel
        let processed = self.flow.run(&pages)?;
        let report = processed.report;

        write_file(&self.config.output_xlsx, &processed.workbook).await?;

        // 展示汇总
        let summary = DisplaySummary::from_report(&report, chrono::Local::now());
        for line in summary.render() {
            info!("{}", line);
        }
        if let Some(path) = &self.config.summary_json {
            let json = summary.to_json()?;
            write_file(path, json.as_bytes()).await?;
            info!("✓ 汇总 JSON 已保存至: {}", path.display());
        }

        let stats = RunStats {
            students: report.students.len(),
            first_year: report.count_in_year(Year::First),
            second_year: report.count_in_year(Year::Second),
            unclassified: report.all_classes.unclassified(),
            elapsed_secs: started.elapsed().as_secs_f64(),
        };
        if stats.unclassified > 0 {
            warn!("⚠️ {} 名学生末科目不是 112/212，未计算等级", stats.unclassified);
        }
        print_final_stats(&stats, &self.config.output_xlsx);

        Ok(report)
    }
}

/// 在阻塞线程上提取文本
async fn extract_pages(path: PathBuf, bytes: Vec<u8>) -> Result<Vec<String>, ExtractionError> {
    tokio::task::spawn_blocking(move || extractor_for(&path).extract_pages(&bytes)).await?
}

async fn write_file(path: &Path, contents: &[u8]) -> AppResult<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
}

//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 设置了 `RUST_LOG` 时以其为准，否则默认 info，详细模式下为 debug。
/// 重复调用不会报错（测试里会多次初始化）。
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input`: 输入文件
pub fn log_startup(input: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 成绩单处理");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 输入文件: {}", input.display());
    info!("{}", "=".repeat(60));
}

/// 本次运行的统计信息
#[derive(Debug, Default)]
pub struct RunStats {
    pub students: usize,
    pub first_year: usize,
    pub second_year: usize,
    pub unclassified: usize,
    pub elapsed_secs: f64,
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 统计信息
/// - `output`: 输出的 Excel 路径
pub fn print_final_stats(stats: &RunStats, output: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!("⏱ 用时 {:.2} 秒", stats.elapsed_secs);
    info!("{}", "=".repeat(60));
    info!("👥 学生总数: {}", stats.students);
    info!("一年级: {} | 二年级: {}", stats.first_year, stats.second_year);
    if stats.unclassified > 0 {
        info!("⚠️ 无法判断学年: {}", stats.unclassified);
    }
    info!("{}", "=".repeat(60));
    info!("\n📥 Excel 已保存至: {}", output.display());
}

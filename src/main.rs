use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use result_processor::utils::logging;
use result_processor::{App, Config};

/// 成绩单处理：PDF → Excel + 汇总
#[derive(Parser, Debug)]
#[command(name = "result_processor", version, about)]
struct Cli {
    /// 成绩单文件（PDF，或已提取的 .txt 文本）
    input: Option<PathBuf>,

    /// Excel 输出路径
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 汇总 JSON 输出路径
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// 命令行参数覆盖环境变量配置
    fn apply(self, mut config: Config) -> Config {
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_xlsx = output;
        }
        if self.summary_json.is_some() {
            config.summary_json = self.summary_json;
        }
        config.verbose_logging |= self.verbose;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Cli::parse().apply(Config::from_env());

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}

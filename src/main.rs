//! 涨停股票信息命令行工具
//!
//! 数据来源：东方财富涨停股池

use akshare_limitup::cli::{self, Cli};
use akshare_limitup::config::AppConfig;
use clap::Parser;
use env_logger::Env;

/// 程序入口
///
/// 单线程运行；任何错误都只打印诊断信息，退出码始终为 0
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            cli::report_error(&e);
            return;
        }
    };

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));
    log::info!("使用配置: {}", config.source);

    if let Err(e) = cli::run(&args, &config).await {
        cli::report_error(&e);
    }
}

//! 命令行入口
//!
//! 解析参数，获取数据后输出报表；失败和无数据都退化为空报表并打印提示

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::services::reporter::{ReportMode, Reporter};
use crate::services::stock::{EastmoneyProvider, LimitUpProvider};
use crate::services::stock_service;

#[derive(Debug, Parser)]
#[command(name = "limit-up", about = "获取涨停股票信息")]
pub struct Cli {
    /// 查询日期，格式：YYYYMMDD，默认为当天
    #[arg(long)]
    pub date: Option<String>,

    /// 显示类型：all-全部信息，simple-简要信息，stats-仅统计信息
    #[arg(long = "type", value_enum, default_value_t = ReportMode::All)]
    pub report_type: ReportMode,

    /// 配置文件（JSON），默认查找 config.json 和 config/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// 使用东方财富数据源运行，报表输出到标准输出
pub async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    println!("当前时间: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let provider = EastmoneyProvider::new(&config.api)?;
    let mut out = io::stdout();
    run_with(&provider, cli, config, &mut out).await?;
    out.flush()?;
    Ok(())
}

/// 获取并输出报表
pub async fn run_with<P: LimitUpProvider>(
    provider: &P,
    cli: &Cli,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let outcome = stock_service::fetch(provider, cli.date.as_deref(), out).await?;
    if let Some(error) = outcome.error() {
        log::debug!("{} 获取失败，错误类型: {}", outcome.date(), error.kind());
    }

    let mut table = outcome.into_table();
    if table.is_empty() {
        writeln!(out, "未获取到涨停股票数据")?;
        return Ok(());
    }

    log::info!("{} 共 {} 只涨停股票", table.date, table.len());
    Reporter::new(config.display.clone()).render(cli.report_type, &mut table, out)?;
    Ok(())
}

/// 顶层错误处理：打印错误信息和类型，进程仍正常退出
pub fn report_error(error: &anyhow::Error) {
    log::error!("{:#}", error);
    println!("发生错误: {}", error);
    println!("错误类型: {}", error_kind(error));
}

/// 错误类型名称
pub fn error_kind(error: &anyhow::Error) -> &'static str {
    if let Some(e) = error.downcast_ref::<FetchError>() {
        e.kind()
    } else if error.downcast_ref::<io::Error>().is_some() {
        "IoError"
    } else if error.downcast_ref::<serde_json::Error>().is_some() {
        "ConfigError"
    } else {
        "Error"
    }
}

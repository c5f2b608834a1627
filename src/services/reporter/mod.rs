//! 涨停报表输出
//!
//! 三种互斥的输出方式：
//! - simple: 简要列表
//! - stats: 统计信息
//! - all: 完整列表（金额字段格式化）加统计信息

pub mod stats;
pub mod table;

use std::io::{self, Write};

use crate::config::DisplayConfig;
use crate::models::ReportTable;
use crate::services::formatter::format_table_magnitudes;

use self::stats::{
    break_distribution, continuous_distribution, first_lock_hour_distribution,
    industry_distribution,
};
use self::table::TextTable;

/// 报表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportMode {
    /// 全部信息
    #[default]
    All,
    /// 简要信息
    Simple,
    /// 仅统计信息
    Stats,
}

const SIMPLE_HEADERS: [&str; 5] = [
    "stock_code",
    "name",
    "industry",
    "continuous_limit_up",
    "break_limit_times",
];

const FULL_HEADERS: [&str; 13] = [
    "rank",
    "stock_code",
    "name",
    "pct_chg",
    "price",
    "amount",
    "market_cap",
    "limit_up_amount",
    "first_limit_up_time",
    "last_limit_up_time",
    "break_limit_times",
    "continuous_limit_up",
    "industry",
];

/// 报表输出器，不保存任何跨调用状态
pub struct Reporter {
    display: DisplayConfig,
}

impl Reporter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    /// 按类型输出报表
    ///
    /// 完整报表会把金额字段原地替换为格式化文本
    pub fn render(
        &self,
        mode: ReportMode,
        table: &mut ReportTable,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match mode {
            ReportMode::Simple => self.simple(table, out),
            ReportMode::Stats => self.stats(table, out),
            ReportMode::All => self.full(table, out),
        }
    }

    pub fn simple(&self, table: &ReportTable, out: &mut dyn Write) -> io::Result<()> {
        write_count(table, out)?;
        writeln!(out, "\n涨停股票列表:")?;

        let mut text = TextTable::new(&SIMPLE_HEADERS);
        for stock in table.iter() {
            text.push_row(vec![
                stock.stock_code.clone(),
                stock.name.clone(),
                stock.industry.clone(),
                stock.continuous_limit_up.to_string(),
                stock.break_limit_times.to_string(),
            ]);
        }
        text.render(&self.display, out)
    }

    pub fn stats(&self, table: &ReportTable, out: &mut dyn Write) -> io::Result<()> {
        write_count(table, out)?;

        writeln!(out, "\n行业分布:")?;
        let mut industries = TextTable::new(&["industry", "count"]);
        for (industry, count) in industry_distribution(table) {
            industries.push_row(vec![industry, count.to_string()]);
        }
        industries.render(&self.display, out)?;

        writeln!(out, "\n连板数统计:")?;
        self.count_table("continuous_limit_up", continuous_distribution(table))
            .render(&self.display, out)?;

        writeln!(out, "\n首次封板时间分布:")?;
        for (hour, count) in first_lock_hour_distribution(table) {
            writeln!(out, "{:02}点: {}个", hour, count)?;
        }

        writeln!(out, "\n炸板次数统计:")?;
        self.count_table("break_limit_times", break_distribution(table))
            .render(&self.display, out)
    }

    pub fn full(&self, table: &mut ReportTable, out: &mut dyn Write) -> io::Result<()> {
        format_table_magnitudes(table);

        write_count(table, out)?;
        writeln!(out, "\n涨停股票列表:")?;

        let mut text = TextTable::new(&FULL_HEADERS);
        for stock in table.iter() {
            text.push_row(vec![
                stock.rank.to_string(),
                stock.stock_code.clone(),
                stock.name.clone(),
                format!("{:.2}", stock.pct_chg),
                format!("{:.2}", stock.price),
                stock.amount.to_string(),
                stock.market_cap.to_string(),
                stock.limit_up_amount.to_string(),
                stock.first_limit_up_time.clone(),
                stock.last_limit_up_time.clone(),
                stock.break_limit_times.to_string(),
                stock.continuous_limit_up.to_string(),
                stock.industry.clone(),
            ]);
        }
        // 完整列表不受显示配置限制
        text.render(&DisplayConfig::default(), out)?;

        self.stats(table, out)
    }

    fn count_table(&self, key: &str, counts: Vec<(u32, usize)>) -> TextTable {
        let mut text = TextTable::new(&[key, "count"]);
        for (value, count) in counts {
            text.push_row(vec![value.to_string(), count.to_string()]);
        }
        text
    }
}

fn write_count(table: &ReportTable, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n今日涨停股票数量: {}", table.len())
}

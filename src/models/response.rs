//! 数据获取结果
//!
//! 用带标签的结果区分“有数据”“当日无数据”和“获取失败”，
//! 调用方按结果类型分派，而不是依赖异常

use crate::error::FetchError;
use crate::models::ReportTable;

/// 一次获取的结果
#[derive(Debug)]
pub enum FetchOutcome {
    /// 获取成功且有数据
    Data(ReportTable),
    /// 获取成功但数据源没有记录
    Empty { date: String },
    /// 获取失败
    Failed { date: String, error: FetchError },
}

impl FetchOutcome {
    /// 查询的交易日期
    pub fn date(&self) -> &str {
        match self {
            FetchOutcome::Data(table) => &table.date,
            FetchOutcome::Empty { date } | FetchOutcome::Failed { date, .. } => date,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// 退化为报表，失败和无数据都得到空报表
    pub fn into_table(self) -> ReportTable {
        match self {
            FetchOutcome::Data(table) => table,
            FetchOutcome::Empty { date } | FetchOutcome::Failed { date, .. } => {
                ReportTable::empty(date)
            }
        }
    }
}

//! 涨停股池数据源模块
//!
//! 数据源只负责取回原始表格，列的选择和校验交给投影步骤

pub mod common;
pub mod eastmoney;

use crate::error::FetchError;
use crate::models::RawTable;

pub use eastmoney::{parse_zt_pool, EastmoneyProvider};

/// 涨停股池数据源
#[allow(async_fn_in_trait)]
pub trait LimitUpProvider {
    /// 获取指定日期（YYYYMMDD）的涨停股池原始表格
    async fn limit_up_pool(&self, date: &str) -> Result<RawTable, FetchError>;
}

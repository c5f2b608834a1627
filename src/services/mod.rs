//! 业务逻辑服务模块
//!
//! 数据获取 → 列投影 → 报表输出

pub mod formatter;    // 数字格式化
pub mod projector;    // 列投影
pub mod reporter;     // 报表输出
pub mod stock;        // 数据源
pub mod stock_service; // 涨停股票获取服务

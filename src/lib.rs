//! 涨停股池日报
//!
//! 从东方财富获取指定交易日的涨停股票，按固定字段整理后
//! 输出简要列表、统计信息或完整报表

pub mod cli;      // 命令行入口
pub mod config;   // 配置
pub mod error;    // 失败类型
pub mod models;   // 数据模型定义
pub mod services; // 业务逻辑服务

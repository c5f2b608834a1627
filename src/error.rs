//! 数据获取失败类型

use thiserror::Error;

/// 涨停股池获取失败
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败或 HTTP 状态异常
    #[error("网络请求失败: {0}")]
    Network(String),

    /// 数据源返回了无法解析的内容
    #[error("数据源返回异常: {0}")]
    Provider(String),

    /// 缺少预期的列
    #[error("列名不匹配，缺少列: {}", .missing.join(", "))]
    SchemaMismatch {
        missing: Vec<String>,
        actual: Vec<String>,
    },

    /// 行数据违反字段约束
    #[error("第 {row} 行数据无效: {reason}")]
    InvalidRow { row: usize, reason: String },
}

impl FetchError {
    /// 失败类型名称
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "NetworkError",
            FetchError::Provider(_) => "ProviderError",
            FetchError::SchemaMismatch { .. } => "SchemaMismatch",
            FetchError::InvalidRow { .. } => "InvalidRow",
        }
    }

    /// 数据源实际返回的列名（仅列名不匹配时）
    pub fn actual_columns(&self) -> Option<&[String]> {
        match self {
            FetchError::SchemaMismatch { actual, .. } => Some(actual),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Provider(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Provider(format!("解析JSON失败: {}", err))
    }
}

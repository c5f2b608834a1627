//! 涨停股票数据模型
//!
//! 定义涨停股池相关的数据结构：
//! - 数据源返回的原始表格（列名为中文表头）
//! - 投影后的固定字段记录
//! - 单个交易日的报表

use std::fmt;

/// 金额类字段（成交额、流通市值、封板资金）
///
/// 完整报表会把数值原地替换为带单位的文本，
/// `NaN` 表示缺失值
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    /// 原始数值
    Value(f64),
    /// 已格式化的文本（如 "3.21亿"）
    Text(String),
}

impl Magnitude {
    /// 缺失值
    pub fn missing() -> Self {
        Magnitude::Value(f64::NAN)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Magnitude::Value(v) if v.is_nan())
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Value(v) => write!(f, "{}", v),
            Magnitude::Text(s) => f.write_str(s),
        }
    }
}

/// 涨停股票记录
///
/// 对应东方财富涨停股池中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct LimitUpStock {
    /// 序号（数据源顺序，从 1 开始）
    pub rank: u32,
    /// 股票代码
    pub stock_code: String,
    /// 股票名称
    pub name: String,
    /// 涨跌幅（百分比）
    pub pct_chg: f64,
    /// 最新价
    pub price: f64,
    /// 成交额（元）
    pub amount: Magnitude,
    /// 流通市值（元）
    pub market_cap: Magnitude,
    /// 封板资金（元）
    pub limit_up_amount: Magnitude,
    /// 首次封板时间（HHMMSS）
    pub first_limit_up_time: String,
    /// 最后封板时间（HHMMSS）
    pub last_limit_up_time: String,
    /// 炸板次数
    pub break_limit_times: u32,
    /// 连板数
    pub continuous_limit_up: u32,
    /// 所属行业
    pub industry: String,
}

/// 单个交易日的涨停报表
///
/// 记录顺序即数据源顺序
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    /// 交易日期（YYYYMMDD）
    pub date: String,
    pub stocks: Vec<LimitUpStock>,
}

impl ReportTable {
    pub fn new(date: impl Into<String>, stocks: Vec<LimitUpStock>) -> Self {
        Self {
            date: date.into(),
            stocks,
        }
    }

    /// 空报表
    pub fn empty(date: impl Into<String>) -> Self {
        Self::new(date, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LimitUpStock> {
        self.stocks.iter()
    }
}

/// 原始单元格
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Number(f64),
    Text(String),
}

impl RawValue {
    /// 转为浮点数，文本会尝试解析
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Null => None,
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// 转为非负整数（计数类字段）
    pub fn as_count(&self) -> Option<u32> {
        let n = self.as_f64()?;
        if n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64 {
            Some(n as u32)
        } else {
            None
        }
    }

    /// 转为文本，整数不带小数点
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Null => String::new(),
            RawValue::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Number(n) => n.as_f64().map(RawValue::Number).unwrap_or(RawValue::Null),
            serde_json::Value::String(s) => RawValue::Text(s.clone()),
            serde_json::Value::Bool(b) => RawValue::Text(b.to_string()),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// 数据源返回的原始表格
///
/// 列名沿用数据源的中文表头，每行单元格与 `columns` 一一对应
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawValue>>,
}

impl RawTable {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<RawValue>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

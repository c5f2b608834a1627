//! 数字格式化
//!
//! 将大额数字转换为“亿”“万”单位，并从封板时间中提取小时

use crate::models::{Magnitude, ReportTable};

/// 一亿
pub const HUNDRED_MILLION: f64 = 100_000_000.0;
/// 一万
pub const TEN_THOUSAND: f64 = 10_000.0;

pub const HUNDRED_MILLION_SUFFIX: &str = "亿";
pub const TEN_THOUSAND_SUFFIX: &str = "万";

/// 缺失值的显示文本
pub const MISSING: &str = "-";

/// 格式化金额字段，已格式化的文本原样返回
pub fn format_magnitude(value: &Magnitude) -> String {
    if value.is_missing() {
        return MISSING.to_string();
    }
    match value {
        Magnitude::Value(v) => format_number(*v),
        Magnitude::Text(s) => s.clone(),
    }
}

/// 格式化数字，保留两位小数
///
/// |v| >= 1亿 显示为“x.xx亿”，|v| >= 1万 显示为“x.xx万”
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        MISSING.to_string()
    } else if value.abs() >= HUNDRED_MILLION {
        format!("{:.2}{}", value / HUNDRED_MILLION, HUNDRED_MILLION_SUFFIX)
    } else if value.abs() >= TEN_THOUSAND {
        format!("{:.2}{}", value / TEN_THOUSAND, TEN_THOUSAND_SUFFIX)
    } else {
        format!("{:.2}", value)
    }
}

/// 将成交额、流通市值、封板资金原地替换为格式化文本
pub fn format_table_magnitudes(table: &mut ReportTable) {
    for stock in table.stocks.iter_mut() {
        for field in [
            &mut stock.amount,
            &mut stock.market_cap,
            &mut stock.limit_up_amount,
        ] {
            *field = Magnitude::Text(format_magnitude(field));
        }
    }
}

/// 从时间字符串（HHMMSS）中提取小时
///
/// 字符串过短、前两位不是数字或小时超过 23 时返回 `None`
pub fn extract_hour(time: &str) -> Option<u32> {
    let prefix = time.get(..2)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse::<u32>().ok().filter(|hour| *hour < 24)
}

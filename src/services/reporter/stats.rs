//! 涨停统计

use std::collections::{BTreeMap, HashMap};

use crate::models::ReportTable;
use crate::services::formatter::extract_hour;

/// 行业分布，按数量降序，数量相同按首次出现顺序
///
/// 行业为空的记录不计入
pub fn industry_distribution(table: &ReportTable) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for stock in table.iter().filter(|s| !s.industry.trim().is_empty()) {
        match positions.get(stock.industry.as_str()) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(stock.industry.as_str(), counts.len());
                counts.push((stock.industry.clone(), 1));
            }
        }
    }

    // sort_by 是稳定排序
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// 连板数分布，按连板数升序
pub fn continuous_distribution(table: &ReportTable) -> Vec<(u32, usize)> {
    count_by(table.iter().map(|s| s.continuous_limit_up))
}

/// 首次封板时间按小时分布，无法解析的时间不计入
pub fn first_lock_hour_distribution(table: &ReportTable) -> Vec<(u32, usize)> {
    count_by(table.iter().filter_map(|s| extract_hour(&s.first_limit_up_time)))
}

/// 炸板次数分布，按次数升序
pub fn break_distribution(table: &ReportTable) -> Vec<(u32, usize)> {
    count_by(table.iter().map(|s| s.break_limit_times))
}

fn count_by(values: impl Iterator<Item = u32>) -> Vec<(u32, usize)> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0usize) += 1;
    }
    counts.into_iter().collect()
}

//! 列投影
//!
//! 从原始表格中按固定顺序选出 13 列并转换为 `LimitUpStock`，
//! 缺列时返回 `SchemaMismatch`

use std::collections::HashSet;

use crate::error::FetchError;
use crate::models::{LimitUpStock, Magnitude, RawTable, RawValue, ReportTable};

/// 需要的列，顺序与 `LimitUpStock` 字段一致
pub const SELECTED_COLUMNS: [&str; 13] = [
    "序号",
    "代码",
    "名称",
    "涨跌幅",
    "最新价",
    "成交额",
    "流通市值",
    "封板资金",
    "首次封板时间",
    "最后封板时间",
    "炸板次数",
    "连板数",
    "所属行业",
];

const RANK: usize = 0;
const CODE: usize = 1;
const NAME: usize = 2;
const PCT_CHG: usize = 3;
const PRICE: usize = 4;
const AMOUNT: usize = 5;
const MARKET_CAP: usize = 6;
const LIMIT_UP_AMOUNT: usize = 7;
const FIRST_TIME: usize = 8;
const LAST_TIME: usize = 9;
const BREAK_TIMES: usize = 10;
const CONTINUOUS: usize = 11;
const INDUSTRY: usize = 12;

/// 行数据短于表头时补的空值
static NULL_CELL: RawValue = RawValue::Null;

/// 投影原始表格
pub fn project(raw: &RawTable, date: &str) -> Result<ReportTable, FetchError> {
    let indices = locate_columns(raw)?;
    let mut seen = HashSet::new();
    let mut stocks = Vec::with_capacity(raw.len());

    for (i, row) in raw.rows.iter().enumerate() {
        let stock = project_row(row, &indices, i + 1)?;
        if !seen.insert(stock.stock_code.clone()) {
            return Err(invalid(i + 1, format!("股票代码 {} 重复", stock.stock_code)));
        }
        stocks.push(stock);
    }

    Ok(ReportTable::new(date, stocks))
}

fn locate_columns(raw: &RawTable) -> Result<[usize; 13], FetchError> {
    let mut indices = [0usize; 13];
    let mut missing = Vec::new();

    for (slot, name) in SELECTED_COLUMNS.iter().enumerate() {
        match raw.column_index(name) {
            Some(index) => indices[slot] = index,
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(FetchError::SchemaMismatch {
            missing,
            actual: raw.columns.clone(),
        })
    }
}

fn project_row(
    row: &[RawValue],
    indices: &[usize; 13],
    row_no: usize,
) -> Result<LimitUpStock, FetchError> {
    let cell = |slot: usize| row.get(indices[slot]).unwrap_or(&NULL_CELL);

    let stock_code = cell(CODE).as_text();
    if stock_code.is_empty() {
        return Err(invalid(row_no, "股票代码为空".to_string()));
    }

    let rank = match cell(RANK) {
        RawValue::Null => row_no as u32,
        value => value
            .as_count()
            .ok_or_else(|| invalid(row_no, format!("序号无效: {:?}", value)))?,
    };

    let break_limit_times = count(cell(BREAK_TIMES), "炸板次数", row_no)?;
    let continuous_limit_up = count(cell(CONTINUOUS), "连板数", row_no)?;
    if continuous_limit_up < 1 {
        return Err(invalid(row_no, "连板数必须大于等于 1".to_string()));
    }

    Ok(LimitUpStock {
        rank,
        stock_code,
        name: cell(NAME).as_text(),
        pct_chg: number(cell(PCT_CHG), "涨跌幅", row_no)?,
        price: number(cell(PRICE), "最新价", row_no)?,
        amount: magnitude(cell(AMOUNT)),
        market_cap: magnitude(cell(MARKET_CAP)),
        limit_up_amount: magnitude(cell(LIMIT_UP_AMOUNT)),
        first_limit_up_time: lock_time(cell(FIRST_TIME)),
        last_limit_up_time: lock_time(cell(LAST_TIME)),
        break_limit_times,
        continuous_limit_up,
        industry: cell(INDUSTRY).as_text(),
    })
}

fn invalid(row: usize, reason: String) -> FetchError {
    FetchError::InvalidRow { row, reason }
}

/// 空值记为 NaN
fn number(value: &RawValue, field: &str, row_no: usize) -> Result<f64, FetchError> {
    match value {
        RawValue::Null => Ok(f64::NAN),
        other => other
            .as_f64()
            .ok_or_else(|| invalid(row_no, format!("{}不是数字: {:?}", field, other))),
    }
}

fn count(value: &RawValue, field: &str, row_no: usize) -> Result<u32, FetchError> {
    value
        .as_count()
        .ok_or_else(|| invalid(row_no, format!("{}不是非负整数: {:?}", field, value)))
}

/// 非数字文本原样保留
fn magnitude(value: &RawValue) -> Magnitude {
    match value {
        RawValue::Null => Magnitude::missing(),
        RawValue::Number(n) => Magnitude::Value(*n),
        RawValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => Magnitude::Value(n),
            Err(_) => Magnitude::Text(s.clone()),
        },
    }
}

fn lock_time(value: &RawValue) -> String {
    match value {
        RawValue::Number(n) if *n >= 0.0 => format!("{:06}", *n as u64),
        other => other.as_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(rank: i64, code: &str, continuous: i64, breaks: i64) -> Vec<RawValue> {
        vec![
            RawValue::from(rank),
            RawValue::from(code),
            RawValue::from("测试股份"),
            RawValue::from(10.02),
            RawValue::from(12.34),
            RawValue::from(523_000_000.0),
            RawValue::from(8_800_000_000.0),
            RawValue::Null,
            RawValue::from(92500_i64),
            RawValue::from("145700"),
            RawValue::from(breaks),
            RawValue::from(continuous),
            RawValue::from("电子"),
        ]
    }

    fn sample_table(rows: Vec<Vec<RawValue>>) -> RawTable {
        let mut table = RawTable::new(&SELECTED_COLUMNS);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    #[test]
    fn test_project_renames_fields() {
        let raw = sample_table(vec![sample_row(1, "600000", 2, 1)]);
        let table = project(&raw, "20240105").unwrap();

        assert_eq!(table.date, "20240105");
        assert_eq!(table.len(), 1);
        let stock = &table.stocks[0];
        assert_eq!(stock.rank, 1);
        assert_eq!(stock.stock_code, "600000");
        assert_eq!(stock.price, 12.34);
        assert_eq!(stock.amount, Magnitude::Value(523_000_000.0));
        assert!(stock.limit_up_amount.is_missing());
        assert_eq!(stock.first_limit_up_time, "092500");
        assert_eq!(stock.last_limit_up_time, "145700");
        assert_eq!(stock.break_limit_times, 1);
        assert_eq!(stock.continuous_limit_up, 2);
        assert_eq!(stock.industry, "电子");
    }

    #[test]
    fn test_project_keeps_source_order_and_ignores_extra_columns() {
        let mut columns: Vec<&str> = SELECTED_COLUMNS.to_vec();
        columns.insert(3, "总市值");
        let mut raw = RawTable::new(&columns);
        for (rank, code) in [(1, "300001"), (2, "000002"), (3, "600003")] {
            let mut row = sample_row(rank, code, 1, 0);
            row.insert(3, RawValue::from(1.0e10));
            raw.push_row(row);
        }

        let table = project(&raw, "20240105").unwrap();
        let codes: Vec<&str> = table.iter().map(|s| s.stock_code.as_str()).collect();
        assert_eq!(codes, vec!["300001", "000002", "600003"]);
        assert_eq!(table.stocks[2].pct_chg, 10.02);
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let columns: Vec<&str> = SELECTED_COLUMNS.iter().copied().filter(|c| *c != "连板数").collect();
        let raw = RawTable::new(&columns);

        match project(&raw, "20240105") {
            Err(FetchError::SchemaMismatch { missing, actual }) => {
                assert_eq!(missing, vec!["连板数".to_string()]);
                assert_eq!(actual.len(), 12);
            }
            other => panic!("期望 SchemaMismatch，实际: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_code_is_invalid() {
        let raw = sample_table(vec![sample_row(1, "600000", 1, 0), sample_row(2, "600000", 1, 0)]);
        let err = project(&raw, "20240105").unwrap_err();
        assert_eq!(err.kind(), "InvalidRow");
        assert!(err.to_string().contains("第 2 行"));
    }

    #[test]
    fn test_row_constraints() {
        let zero_continuous = sample_table(vec![sample_row(1, "600000", 0, 0)]);
        assert_eq!(project(&zero_continuous, "d").unwrap_err().kind(), "InvalidRow");

        let negative_breaks = sample_table(vec![sample_row(1, "600000", 1, -1)]);
        assert_eq!(project(&negative_breaks, "d").unwrap_err().kind(), "InvalidRow");

        let empty_code = sample_table(vec![sample_row(1, "", 1, 0)]);
        assert_eq!(project(&empty_code, "d").unwrap_err().kind(), "InvalidRow");
    }

    #[test]
    fn test_empty_raw_table_projects_to_empty_report() {
        let raw = sample_table(Vec::new());
        let table = project(&raw, "20240105").unwrap();
        assert!(table.is_empty());
    }
}

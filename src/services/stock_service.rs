//! 涨停股票获取服务
//!
//! 调用数据源、投影列，并把任何失败降级为带类型的结果。
//! 进度和诊断信息写入调用方提供的输出

use std::io::{self, Write};

use chrono::Local;

use crate::error::FetchError;
use crate::models::FetchOutcome;
use crate::services::projector::project;
use crate::services::stock::LimitUpProvider;

/// 当天日期（YYYYMMDD）
pub fn today() -> String {
    Local::now().format("%Y%m%d").to_string()
}

/// 获取涨停股票数据
///
/// 未指定日期时使用当天日期。日期格式不做本地校验，
/// 非法日期由数据源返回失败。只有写输出失败才返回 `Err`
pub async fn fetch<P: LimitUpProvider>(
    provider: &P,
    date: Option<&str>,
    out: &mut dyn Write,
) -> io::Result<FetchOutcome> {
    writeln!(out, "正在获取涨停股票数据...")?;
    let date = date.map(str::to_string).unwrap_or_else(today);

    let raw = match provider.limit_up_pool(&date).await {
        Ok(raw) => raw,
        Err(error) => return failed(date, error, out),
    };

    writeln!(out, "获取到涨停股票数据，共 {} 条记录", raw.len())?;
    if raw.is_empty() {
        log::info!("{} 没有涨停股票数据", date);
        return Ok(FetchOutcome::Empty { date });
    }

    match project(&raw, &date) {
        Ok(table) => Ok(FetchOutcome::Data(table)),
        Err(error) => failed(date, error, out),
    }
}

fn failed(date: String, error: FetchError, out: &mut dyn Write) -> io::Result<FetchOutcome> {
    log::warn!("获取 {} 涨停股票数据失败: {}", date, error);
    writeln!(out, "获取数据时发生错误: {}", error)?;
    writeln!(out, "错误类型: {}", error.kind())?;
    if let Some(actual) = error.actual_columns() {
        writeln!(out, "列名不匹配，实际列名为:")?;
        writeln!(out, "{:?}", actual)?;
    }
    writeln!(out, "请确保网络连接正常")?;
    Ok(FetchOutcome::Failed { date, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawTable, RawValue};
    use crate::services::projector::SELECTED_COLUMNS;
    use std::cell::RefCell;

    /// 返回固定结果的数据源
    struct StaticProvider {
        result: RefCell<Option<Result<RawTable, FetchError>>>,
        requested: RefCell<Vec<String>>,
    }

    impl StaticProvider {
        fn new(result: Result<RawTable, FetchError>) -> Self {
            Self {
                result: RefCell::new(Some(result)),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl LimitUpProvider for StaticProvider {
        async fn limit_up_pool(&self, date: &str) -> Result<RawTable, FetchError> {
            self.requested.borrow_mut().push(date.to_string());
            self.result
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(FetchError::Provider("已取过".to_string())))
        }
    }

    fn one_row_table(columns: &[&str]) -> RawTable {
        let mut table = RawTable::new(columns);
        let row = columns
            .iter()
            .map(|column| match *column {
                "代码" => RawValue::from("600000"),
                "连板数" => RawValue::from(3_i64),
                "炸板次数" => RawValue::from(0_i64),
                "首次封板时间" | "最后封板时间" => RawValue::from("093000"),
                "序号" => RawValue::from(1_i64),
                "名称" | "所属行业" => RawValue::from("X"),
                _ => RawValue::from(1.5),
            })
            .collect();
        table.push_row(row);
        table
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let provider = StaticProvider::new(Ok(one_row_table(&SELECTED_COLUMNS)));
        let mut out = Vec::new();
        let outcome = fetch(&provider, Some("20240105"), &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("正在获取涨停股票数据..."));
        assert!(output.contains("共 1 条记录"));
        assert_eq!(provider.requested.borrow().as_slice(), ["20240105".to_string()]);
        match outcome {
            FetchOutcome::Data(table) => {
                assert_eq!(table.len(), 1);
                assert_eq!(table.stocks[0].continuous_limit_up, 3);
            }
            other => panic!("期望 Data，实际: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_defaults_to_today() {
        let provider = StaticProvider::new(Ok(RawTable::new(&SELECTED_COLUMNS)));
        let outcome = fetch(&provider, None, &mut Vec::new()).await.unwrap();

        let requested = provider.requested.borrow();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0].len(), 8);
        assert!(requested[0].chars().all(|c| c.is_ascii_digit()));
        assert!(matches!(outcome, FetchOutcome::Empty { .. }));
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_failed_outcome() {
        let provider = StaticProvider::new(Err(FetchError::Network("连接被拒绝".to_string())));
        let mut out = Vec::new();
        let outcome = fetch(&provider, Some("20240105"), &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("错误类型: NetworkError"));
        assert!(!output.contains("列名不匹配"));
        assert!(output.contains("请确保网络连接正常"));
        assert_eq!(outcome.date(), "20240105");
        assert_eq!(outcome.error().map(FetchError::kind), Some("NetworkError"));
        assert!(outcome.into_table().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_schema_mismatch() {
        let columns: Vec<&str> = SELECTED_COLUMNS.iter().copied().filter(|c| *c != "封板资金").collect();
        let provider = StaticProvider::new(Ok(one_row_table(&columns)));
        let mut out = Vec::new();
        let outcome = fetch(&provider, Some("20240105"), &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("错误类型: SchemaMismatch"));
        assert!(output.contains("列名不匹配，实际列名为:"));
        assert!(output.contains("\"代码\""));
        assert!(output.contains("\"所属行业\""));
        assert!(!output.contains("\"封板资金\""));
        match outcome {
            FetchOutcome::Failed { error: FetchError::SchemaMismatch { missing, .. }, .. } => {
                assert_eq!(missing, vec!["封板资金".to_string()]);
            }
            other => panic!("期望 SchemaMismatch，实际: {:?}", other),
        }
    }
}

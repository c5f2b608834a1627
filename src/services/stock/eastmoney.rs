//! 东方财富涨停股池接口实现
//!
//! 对接 https://push2ex.eastmoney.com/getTopicZTPool
//! 对应 akshare 的 stock_zt_pool_em() 函数

use chrono::Utc;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

use super::common::{
    COL_RANK, POOL_FIELDS, PRICE_SCALE, SKIPPED_FIELDS, ZT_POOL_DPT, ZT_POOL_PAGE_SIZE,
    ZT_POOL_PATH, ZT_POOL_SORT,
};
use super::LimitUpProvider;
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::{RawTable, RawValue};

/// 东方财富数据源
pub struct EastmoneyProvider {
    client: Client,
    base_url: String,
    ut: String,
}

impl EastmoneyProvider {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(api.user_agent.as_str());
        if api.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(api.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            ut: api.ut.clone(),
        })
    }

    fn pool_url(&self) -> String {
        format!("{}{}", self.base_url, ZT_POOL_PATH)
    }
}

impl LimitUpProvider for EastmoneyProvider {
    async fn limit_up_pool(&self, date: &str) -> Result<RawTable, FetchError> {
        let url = self.pool_url();
        let timestamp = Utc::now().timestamp_millis().to_string();
        log::debug!("📡 请求涨停股池 URL: {}?date={}", url, date);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ut", self.ut.as_str()),
                ("dpt", ZT_POOL_DPT),
                ("Pageindex", "0"),
                ("pagesize", ZT_POOL_PAGE_SIZE),
                ("sort", ZT_POOL_SORT),
                ("date", date),
                ("_", timestamp.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "获取涨停股池失败: {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let preview: String = text.chars().take(300).collect();
        log::debug!("📥 原始响应数据: {}", preview);
        parse_zt_pool(&text)
    }
}

/// 解析涨停股池响应
///
/// 格式: {"rc":0,"data":{"tc":2,"pool":[{"c":"600000","n":"浦发银行","p":10230,...}]}}
/// `data` 为 null 表示该日没有数据
pub fn parse_zt_pool(text: &str) -> Result<RawTable, FetchError> {
    let json: Value = serde_json::from_str(text)?;

    let data = &json["data"];
    if data.is_null() {
        log::debug!("涨停股池返回 data=null");
        let mut columns = vec![COL_RANK];
        columns.extend(POOL_FIELDS.iter().map(|(_, column)| *column));
        return Ok(RawTable::new(&columns));
    }

    let pool = data["pool"]
        .as_array()
        .ok_or_else(|| FetchError::Provider("响应缺少 pool 字段".to_string()))?;

    let items = pool
        .iter()
        .map(|item| {
            item.as_object()
                .ok_or_else(|| FetchError::Provider(format!("pool 元素不是对象: {}", item)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let keys = collect_keys(&items);
    let mut columns = vec![COL_RANK.to_string()];
    columns.extend(keys.iter().map(|key| column_name(key).to_string()));

    let mut table = RawTable::new(&columns);
    for (i, item) in items.iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        row.push(RawValue::Number((i + 1) as f64));
        for key in &keys {
            row.push(convert_field(key, item.get(key.as_str())));
        }
        table.push_row(row);
    }

    log::debug!("📊 解析到 {} 条涨停记录，列: {:?}", table.len(), table.columns);
    Ok(table)
}

/// 已知字段按固定顺序排在前面，未知字段按首次出现顺序追加
fn collect_keys(items: &[&Map<String, Value>]) -> Vec<String> {
    let mut keys: Vec<String> = POOL_FIELDS
        .iter()
        .filter(|(key, _)| items.iter().any(|item| item.contains_key(*key)))
        .map(|(key, _)| key.to_string())
        .collect();

    for item in items {
        for key in item.keys() {
            let known = POOL_FIELDS.iter().any(|(k, _)| k == key);
            if !known && !SKIPPED_FIELDS.contains(&key.as_str()) && !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

fn column_name(key: &str) -> &str {
    POOL_FIELDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, column)| *column)
        .unwrap_or(key)
}

fn convert_field(key: &str, value: Option<&Value>) -> RawValue {
    let Some(value) = value else {
        return RawValue::Null;
    };

    match key {
        "p" => match RawValue::from(value).as_f64() {
            Some(p) => RawValue::Number(p / PRICE_SCALE),
            None => RawValue::Null,
        },
        "fbt" | "lbt" => pad_lock_time(value),
        "zttj" => {
            let days = RawValue::from(&value["days"]).as_text();
            let ct = RawValue::from(&value["ct"]).as_text();
            RawValue::Text(format!("{}/{}", days, ct))
        }
        _ => RawValue::from(value),
    }
}

/// 封板时间补足 6 位，如 92500 -> "092500"
fn pad_lock_time(value: &Value) -> RawValue {
    match RawValue::from(value) {
        RawValue::Null => RawValue::Null,
        other => RawValue::Text(format!("{:0>6}", other.as_text())),
    }
}

//! 配置模块
//!
//! 支持从 JSON 文件加载配置，缺省字段使用默认值

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 东方财富涨停股池接口地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 接口 ut 参数
    #[serde(default = "default_ut")]
    pub ut: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// 请求超时时间（秒），0 表示不设超时
    #[serde(default)]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 报表显示配置
///
/// 未设置即不限制
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 每行最大显示宽度
    #[serde(default)]
    pub max_width: Option<usize>,
    /// 表格最多显示行数
    #[serde(default)]
    pub max_rows: Option<usize>,
}

/// 配置来源
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigSource {
    #[default]
    Default,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("默认配置"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

fn default_base_url() -> String { "https://push2ex.eastmoney.com".to_string() }
fn default_ut() -> String { "7eea3edcaed734bea9cbfc24409ed989".to_string() }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}
fn default_log_level() -> String { "warn".to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ut: default_ut(),
            user_agent: default_user_agent(),
            timeout_secs: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 未指定配置文件时依次查找的位置
const CONFIG_PATHS: [&str; 2] = ["config.json", "config/config.json"];

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_json::from_str(&content)?;
        config.source = ConfigSource::File(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// 加载配置
    ///
    /// 显式指定的文件加载失败时返回错误；
    /// 否则查找默认位置，找不到或无法解析则使用默认值。
    /// 日志系统此时尚未初始化，来源记录在 `source` 中
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path)
                .map_err(|e| anyhow::anyhow!("加载配置文件 {} 失败: {}", path.display(), e));
        }

        for path in CONFIG_PATHS {
            if Path::new(path).exists() {
                if let Ok(config) = Self::from_file(path) {
                    return Ok(config);
                }
            }
        }

        Ok(Self::default())
    }
}

//! 公共常量

// ==================== 东方财富 API 常量 ====================

/// 涨停股池接口路径
pub const ZT_POOL_PATH: &str = "/getTopicZTPool";
/// 涨停股池接口固定参数
pub const ZT_POOL_DPT: &str = "wz.ztzt";
pub const ZT_POOL_PAGE_SIZE: &str = "10000";
pub const ZT_POOL_SORT: &str = "fbt:asc";

// ==================== 表头 ====================

pub const COL_RANK: &str = "序号";

/// 接口字段到中文表头的映射，顺序即原始表格的列顺序
pub const POOL_FIELDS: [(&str, &str); 15] = [
    ("c", "代码"),
    ("n", "名称"),
    ("zdp", "涨跌幅"),
    ("p", "最新价"),
    ("amount", "成交额"),
    ("ltsz", "流通市值"),
    ("tshare", "总市值"),
    ("hs", "换手率"),
    ("fund", "封板资金"),
    ("fbt", "首次封板时间"),
    ("lbt", "最后封板时间"),
    ("zbc", "炸板次数"),
    ("zttj", "涨停统计"),
    ("lbc", "连板数"),
    ("hybk", "所属行业"),
];

/// 接口里不需要展示的字段
pub const SKIPPED_FIELDS: [&str; 1] = ["m"];

/// 最新价放大倍数
pub const PRICE_SCALE: f64 = 1000.0;

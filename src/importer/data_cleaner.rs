// ==========================================
// 智能数据导入 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 列表拆分 / 布尔与数值与日期解析
// 红线: 不做值语义理解，只做简单类型转换
// ==========================================

use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 列表字段分隔符
const LIST_SEPARATORS: [char; 3] = [',', ';', '|'];

/// 视为 true 的布尔标记（大小写不敏感）
const TRUE_TOKENS: [&str; 4] = ["true", "1", "yes", "on"];

/// 支持的日期格式（按顺序尝试）
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d", "%Y.%m.%d", "%d.%m.%Y"];

/// 支持的日期时间格式（取日期部分）
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    fn split_list(&self, value: &str) -> Vec<String> {
        value
            .split(LIST_SEPARATORS)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn parse_bool(&self, value: &str) -> bool {
        let lowered = value.trim().to_lowercase();
        TRUE_TOKENS.contains(&lowered.as_str())
    }

    fn parse_number(&self, value: &str) -> f64 {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => 0.0,
        }
    }

    fn parse_date(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();

        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        {
            return Some(date);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.date_naive());
        }

        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(|dt| dt.date())
    }
}

// ==========================================
// 智能数据导入 - 领域类型定义
// ==========================================
// 职责: 导入目标、源格式、字段类型、置信等级
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 导入目标 (Target Collection)
// ==========================================
// 顺序即注册表枚举顺序，评分并列时按此顺序取先
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetId {
    Websites,    // 网站收藏
    Tasks,       // 待办任务
    Credentials, // 账号密码
    Contacts,    // 联系人
    Notes,       // 笔记
    Expenses,    // 支出记录
}

impl TargetId {
    /// 全部导入目标（注册表枚举顺序）
    pub const ALL: [TargetId; 6] = [
        TargetId::Websites,
        TargetId::Tasks,
        TargetId::Credentials,
        TargetId::Contacts,
        TargetId::Notes,
        TargetId::Expenses,
    ];

    /// 集合标识（存储层使用的名称）
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetId::Websites => "websites",
            TargetId::Tasks => "tasks",
            TargetId::Credentials => "credentials",
            TargetId::Contacts => "contacts",
            TargetId::Notes => "notes",
            TargetId::Expenses => "expenses",
        }
    }

    /// 从集合标识解析（大小写与首尾空白不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        TargetId::ALL.into_iter().find(|t| t.as_str() == wanted)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 源数据格式 (Source Format)
// ==========================================
// 仅作展示信息，解析后不再修改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    StructuredJson, // JSON 数组/对象
    JsonLines,      // 每行一个 JSON 对象
    Csv,            // 逗号等分隔
    Tsv,            // 制表符分隔
    PlainText,      // 每行一条
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::StructuredJson => write!(f, "structured-json"),
            SourceFormat::JsonLines => write!(f, "json-lines"),
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Tsv => write!(f, "tsv"),
            SourceFormat::PlainText => write!(f, "plain-text"),
        }
    }
}

// ==========================================
// 字段类型 (Field Kind)
// ==========================================
// 决定归一化阶段的类型转换规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,    // 文本：TRIM
    Number,  // 数值：解析失败为 0
    Boolean, // 布尔：true/1/yes/on
    List,    // 列表：按 , ; | 拆分
    Date,    // 日期：缺省为当天
}

// ==========================================
// 置信等级 (Confidence Tier)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_id_from_str() {
        assert_eq!(TargetId::from_str("websites"), Some(TargetId::Websites));
        assert_eq!(TargetId::from_str("  Tasks "), Some(TargetId::Tasks));
        assert_eq!(TargetId::from_str("bookmarks"), None);
    }

    #[test]
    fn test_target_id_roundtrip_all() {
        for target in TargetId::ALL {
            assert_eq!(TargetId::from_str(&target.to_string()), Some(target));
        }
    }

    #[test]
    fn test_source_format_serde() {
        let json = serde_json::to_string(&SourceFormat::StructuredJson).unwrap();
        assert_eq!(json, "\"structured-json\"");
        assert_eq!(SourceFormat::PlainText.to_string(), "plain-text");
    }

    #[test]
    fn test_confidence_tier_order() {
        assert!(ConfidenceTier::Low < ConfidenceTier::Medium);
        assert!(ConfidenceTier::Medium < ConfidenceTier::High);
    }
}

// ==========================================
// 智能数据导入 - 映射与归一化结果模型
// ==========================================
// FieldMap / NormalizedItem 每次切换目标都重新计算，不缓存
// ==========================================

use crate::domain::types::TargetId;
use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ==========================================
// CategoryScore - 分类评分
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub target: TargetId,
    pub score: i32,
}

// ==========================================
// FieldMap - 字段映射表
// ==========================================
// 目标字段 → 源字段；每个目标字段至多一项，每个源字段至多被占用一次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(&'static str, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定目标字段与源字段
    ///
    /// # 返回
    /// - true: 绑定成功
    /// - false: 目标字段已映射或源字段已被占用（不做任何修改）
    pub fn bind(&mut self, target_field: &'static str, source_field: &str) -> bool {
        if self.is_mapped(target_field) || self.is_claimed(source_field) {
            return false;
        }
        self.entries.push((target_field, source_field.to_string()));
        true
    }

    pub fn source_for(&self, target_field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == target_field)
            .map(|(_, s)| s.as_str())
    }

    pub fn is_mapped(&self, target_field: &str) -> bool {
        self.entries.iter().any(|(t, _)| *t == target_field)
    }

    pub fn is_claimed(&self, source_field: &str) -> bool {
        self.entries.iter().any(|(_, s)| s == source_field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(t, s)| (*t, s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (target_field, source_field) in &self.entries {
            map.serialize_entry(target_field, source_field)?;
        }
        map.end()
    }
}

// ==========================================
// FieldValue - 归一化后的字段值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    List(Vec<String>),
    Date(NaiveDate),
}

impl FieldValue {
    /// 必填字段校验口径：非空文本 / 非零数值 / true / 非空列表；日期恒为真
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Boolean(b) => *b,
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Date(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

// ==========================================
// NormalizedItem - 归一化记录
// ==========================================
// 字段顺序与目标 schema 声明顺序一致（必填在前）
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub target: TargetId,
    values: Vec<(&'static str, FieldValue)>,
}

impl NormalizedItem {
    pub fn new(target: TargetId, values: Vec<(&'static str, FieldValue)>) -> Self {
        Self { target, values }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for NormalizedItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_rejects_reused_source() {
        let mut map = FieldMap::new();
        assert!(map.bind("name", "title"));
        assert!(!map.bind("description", "title"));
        assert!(!map.bind("name", "label"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.source_for("name"), Some("title"));
        assert_eq!(map.source_for("description"), None);
    }

    #[test]
    fn test_field_value_truthiness() {
        assert!(FieldValue::Text("x".to_string()).is_truthy());
        assert!(!FieldValue::Text(String::new()).is_truthy());
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::Number(f64::NAN).is_truthy());
        assert!(FieldValue::Number(-2.5).is_truthy());
        assert!(!FieldValue::Boolean(false).is_truthy());
        assert!(!FieldValue::List(vec![]).is_truthy());
        assert!(FieldValue::Date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()).is_truthy());
    }

    #[test]
    fn test_normalized_item_serializes_as_flat_object() {
        let item = NormalizedItem::new(
            TargetId::Websites,
            vec![
                ("name", FieldValue::Text("Blog".to_string())),
                ("tags", FieldValue::List(vec!["dev".to_string()])),
                ("favorite", FieldValue::Boolean(false)),
                (
                    "created_at",
                    FieldValue::Date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()),
                ),
            ],
        );

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Blog","tags":["dev"],"favorite":false,"created_at":"2025-01-20"}"#
        );
    }
}

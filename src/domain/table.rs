// ==========================================
// 智能数据导入 - 解析结果模型
// ==========================================
// 用途: 表格解析器输出，导入会话内只读
// 生命周期: 每次导入创建一次，之后不可变
// ==========================================

use crate::domain::types::SourceFormat;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ==========================================
// ParsedRow - 原始行记录
// ==========================================
// 源字段名 → 源字段值，保持首次出现顺序；此阶段全部为字符串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    cells: Vec<(String, String)>,
}

impl ParsedRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入字段；同名字段覆盖原值但保留原位置
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == field) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = ParsedRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for ParsedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ==========================================
// ParsedTable - 统一表格结构
// ==========================================
// 不变量: 任一行出现的字段名都在 source_fields 中（按首次出现排序）
#[derive(Debug, Clone, Serialize)]
pub struct ParsedTable {
    rows: Vec<ParsedRow>,
    source_fields: Vec<String>,
    format: SourceFormat,
}

impl ParsedTable {
    /// 由行记录构建，source_fields 取所有行字段的并集
    pub fn from_rows(rows: Vec<ParsedRow>, format: SourceFormat) -> Self {
        let mut source_fields: Vec<String> = Vec::new();
        for row in &rows {
            for field in row.fields() {
                if !source_fields.iter().any(|f| f == field) {
                    source_fields.push(field.to_string());
                }
            }
        }

        Self {
            rows,
            source_fields,
            format,
        }
    }

    pub fn rows(&self) -> &[ParsedRow] {
        &self.rows
    }

    pub fn source_fields(&self) -> &[String] {
        &self.source_fields
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_row_keeps_insertion_order() {
        let mut row = ParsedRow::new();
        row.insert("url", "https://a.com");
        row.insert("name", "A");
        row.insert("url", "https://b.com");

        assert_eq!(row.fields().collect::<Vec<_>>(), vec!["url", "name"]);
        assert_eq!(row.get("url"), Some("https://b.com"));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn test_source_fields_union_first_occurrence() {
        let rows = vec![
            ParsedRow::from_iter([("title", "A"), ("priority", "high")]),
            ParsedRow::from_iter([("title", "B"), ("due", "2025-01-01")]),
        ];
        let table = ParsedTable::from_rows(rows, SourceFormat::JsonLines);

        assert_eq!(table.source_fields(), &["title", "priority", "due"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parsed_row_serializes_in_order() {
        let row = ParsedRow::from_iter([("b", "2"), ("a", "1")]);
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"b":"2","a":"1"}"#);
    }
}

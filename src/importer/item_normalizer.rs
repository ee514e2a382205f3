// ==========================================
// 智能数据导入 - 记录归一化器
// ==========================================
// 职责: 行记录 + 字段映射 → 目标类型化记录
// 流程: 取值 → NULL 标准化 → 按字段类型转换 / 缺省值 → 必填校验
// ==========================================
// 说明: 必填字段带占位缺省值（如 "Untitled"）时，缺数据的行仍会通过校验；
//       此处"必填"的含义是"缺省后必有值"，而非"源数据必须提供"
// ==========================================

use crate::config::target_registry::{FieldDefault, FieldSpec, TargetSchema};
use crate::domain::{FieldKind, FieldMap, FieldValue, NormalizedItem, ParsedRow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

// ==========================================
// NormalizeOutcome - 归一化结果
// ==========================================
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub items: Vec<NormalizedItem>,
    /// 未通过必填校验而被丢弃的行数
    pub rejected: usize,
}

// ==========================================
// ItemNormalizer - 记录归一化器
// ==========================================
pub struct ItemNormalizer {
    cleaner: Box<dyn DataCleanerTrait>,
    // None 表示运行时取本地当天日期
    today: Option<NaiveDate>,
}

impl Default for ItemNormalizer {
    fn default() -> Self {
        Self::new(Box::new(DataCleaner))
    }
}

impl ItemNormalizer {
    pub fn new(cleaner: Box<dyn DataCleanerTrait>) -> Self {
        Self {
            cleaner,
            today: None,
        }
    }

    /// 固定"当天"日期（用于可重复的结果与测试）
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// 归一化全部行
    ///
    /// # 返回
    /// - items: 通过必填校验的记录（保持源行顺序）
    /// - rejected: 被丢弃的行数（不逐行报告）
    pub fn normalize(
        &self,
        rows: &[ParsedRow],
        schema: &TargetSchema,
        field_map: &FieldMap,
    ) -> NormalizeOutcome {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());

        let mut items = Vec::with_capacity(rows.len());
        let mut rejected = 0usize;

        for (idx, row) in rows.iter().enumerate() {
            match self.normalize_row(row, schema, field_map, today) {
                Some(item) => items.push(item),
                None => {
                    debug!(row_number = idx + 1, target = %schema.id, "必填字段为空，丢弃该行");
                    rejected += 1;
                }
            }
        }

        info!(
            target = %schema.id,
            accepted = items.len(),
            rejected = rejected,
            "记录归一化完成"
        );

        NormalizeOutcome { items, rejected }
    }

    /// 单行归一化；必填字段任一为假值时返回 None
    pub fn normalize_row(
        &self,
        row: &ParsedRow,
        schema: &TargetSchema,
        field_map: &FieldMap,
        today: NaiveDate,
    ) -> Option<NormalizedItem> {
        let values: Vec<(&'static str, FieldValue)> = schema
            .fields()
            .map(|field| {
                let raw = field_map
                    .source_for(field.name)
                    .and_then(|source| row.get(source));
                (field.name, self.coerce(field, raw, today))
            })
            .collect();

        let accepted = values
            .iter()
            .filter(|(name, _)| schema.is_required(name))
            .all(|(_, value)| value.is_truthy());

        accepted.then(|| NormalizedItem::new(schema.id, values))
    }

    /// 按字段类型转换；源值缺失或为空白时取缺省值
    fn coerce(&self, field: &FieldSpec, raw: Option<&str>, today: NaiveDate) -> FieldValue {
        let Some(value) = self.cleaner.normalize_null(raw) else {
            return default_value(field, today);
        };

        match field.kind {
            FieldKind::Text => FieldValue::Text(self.cleaner.clean_text(&value)),
            FieldKind::List => FieldValue::List(self.cleaner.split_list(&value)),
            FieldKind::Boolean => FieldValue::Boolean(self.cleaner.parse_bool(&value)),
            FieldKind::Number => FieldValue::Number(self.cleaner.parse_number(&value)),
            FieldKind::Date => self
                .cleaner
                .parse_date(&value)
                .map(FieldValue::Date)
                .unwrap_or_else(|| default_value(field, today)),
        }
    }
}

/// 字段缺省值；未定义缺省时取该类型的空值
fn default_value(field: &FieldSpec, today: NaiveDate) -> FieldValue {
    match field.default {
        FieldDefault::Text(text) => FieldValue::Text(text.to_string()),
        FieldDefault::Boolean(flag) => FieldValue::Boolean(flag),
        FieldDefault::Today => FieldValue::Date(today),
        FieldDefault::None => match field.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0.0),
            FieldKind::Boolean => FieldValue::Boolean(false),
            FieldKind::List => FieldValue::List(Vec::new()),
            FieldKind::Date => FieldValue::Date(today),
        },
    }
}

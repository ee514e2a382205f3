// ==========================================
// 智能数据导入 - 表格解析器实现
// ==========================================
// 职责: 原始文本 → ParsedTable
// 策略（严格按序，首个成功者胜出）:
//   1. JSON 数组/对象
//   2. JSON Lines
//   3. 分隔符表格（CSV / TSV，首行为表头）
//   4. 纯文本（每个非空行一条，字段名 item）
// ==========================================

use crate::domain::{ParsedRow, ParsedTable, SourceFormat};
use crate::importer::importer_trait::TableParser;
use csv::ReaderBuilder;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// 纯文本与标量 JSON 元素使用的字段名
pub const PLAIN_TEXT_FIELD: &str = "item";

/// 自动探测的分隔符候选（制表符单独判断）
const DELIMITER_CANDIDATES: [u8; 3] = [b',', b';', b'|'];

pub struct TextTableParser;

impl TableParser for TextTableParser {
    fn parse(&self, text: &str, filename_hint: Option<&str>) -> ParsedTable {
        let table = self
            .try_structured_json(text)
            .or_else(|| self.try_json_lines(text))
            .or_else(|| self.try_delimited(text, filename_hint))
            .unwrap_or_else(|| self.parse_plain_text(text));

        info!(
            format = %table.format(),
            rows = table.row_count(),
            fields = table.source_fields().len(),
            "文本解析完成"
        );
        table
    }
}

impl TextTableParser {
    /// 策略 1: 整段 JSON（单个对象包装为一行）
    fn try_structured_json(&self, text: &str) -> Option<ParsedTable> {
        let trimmed = text.trim();
        if !(trimmed.starts_with('[') || trimmed.starts_with('{')) {
            return None;
        }

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "JSON 解析失败，尝试下一策略");
                return None;
            }
        };

        let rows: Vec<ParsedRow> = match &value {
            Value::Array(elements) => elements.iter().filter_map(row_from_json).collect(),
            other => row_from_json(other).into_iter().collect(),
        };

        Some(ParsedTable::from_rows(rows, SourceFormat::StructuredJson))
    }

    /// 策略 2: 每个非空行一个 JSON 对象；任一行失败则整体放弃
    fn try_json_lines(&self, text: &str) -> Option<ParsedTable> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if !lines.first().is_some_and(|line| line.starts_with('{')) {
            return None;
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            match serde_json::from_str::<Value>(line) {
                Ok(Value::Object(map)) => rows.push(row_from_object(&map)),
                Ok(_) => {
                    debug!(line = idx + 1, "JSON Lines 行不是对象，放弃该策略");
                    return None;
                }
                Err(e) => {
                    debug!(line = idx + 1, error = %e, "JSON Lines 行解析失败，放弃该策略");
                    return None;
                }
            }
        }

        let rows = rows.into_iter().filter(|row| !row.is_empty()).collect();
        Some(ParsedTable::from_rows(rows, SourceFormat::JsonLines))
    }

    /// 策略 3: 分隔符表格
    ///
    /// 至少 1 行数据且超过 1 个字段才接受，避免单列文本被误判为 CSV
    fn try_delimited(&self, text: &str, filename_hint: Option<&str>) -> Option<ParsedTable> {
        let first_line = text.lines().find(|line| !line.trim().is_empty())?;

        let hinted_tsv = filename_hint
            .map(|name| name.trim().to_lowercase().ends_with(".tsv"))
            .unwrap_or(false);
        let is_tsv = first_line.contains('\t') || hinted_tsv;
        let (delimiter, format) = if is_tsv {
            (b'\t', SourceFormat::Tsv)
        } else {
            (detect_delimiter(first_line), SourceFormat::Csv)
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(text.as_bytes());

        // 读取表头
        let headers: Vec<String> = match reader.headers() {
            Ok(record) => record.iter().map(|h| h.trim().to_string()).collect(),
            Err(e) => {
                debug!(error = %e, "表头读取失败，尝试下一策略");
                return None;
            }
        };

        // 读取所有行（无表头的列丢弃）
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    debug!(error = %e, "分隔符表格解析失败，尝试下一策略");
                    return None;
                }
            };

            let row: ParsedRow = record
                .iter()
                .enumerate()
                .filter_map(|(col_idx, value)| {
                    headers
                        .get(col_idx)
                        .filter(|header| !header.is_empty())
                        .map(|header| (header.clone(), value.trim().to_string()))
                })
                .collect();
            rows.push(row);
        }

        let table = ParsedTable::from_rows(rows, format);
        if table.row_count() >= 1 && table.source_fields().len() > 1 {
            Some(table)
        } else {
            debug!(
                rows = table.row_count(),
                fields = table.source_fields().len(),
                "分隔符表格不足两列或无数据，退化为纯文本"
            );
            None
        }
    }

    /// 策略 4: 纯文本兜底（不会失败）
    fn parse_plain_text(&self, text: &str) -> ParsedTable {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| ParsedRow::from_iter([(PLAIN_TEXT_FIELD, line)]))
            .collect();

        ParsedTable::from_rows(rows, SourceFormat::PlainText)
    }
}

/// 首行出现次数最多的候选分隔符；都没有出现时默认逗号
fn detect_delimiter(first_line: &str) -> u8 {
    let mut best = (b',', 0usize);
    for candidate in DELIMITER_CANDIDATES {
        let count = first_line.bytes().filter(|b| *b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

/// JSON 元素 → 行：对象展开为字段；标量写入 item 字段；空对象/空值跳过
fn row_from_json(value: &Value) -> Option<ParsedRow> {
    let row = match value {
        Value::Object(map) => row_from_object(map),
        scalar => {
            let text = flatten_value(scalar);
            if text.trim().is_empty() {
                return None;
            }
            ParsedRow::from_iter([(PLAIN_TEXT_FIELD.to_string(), text)])
        }
    };
    (!row.is_empty()).then_some(row)
}

fn row_from_object(map: &Map<String, Value>) -> ParsedRow {
    map.iter()
        .map(|(key, value)| (key.clone(), flatten_value(value)))
        .collect()
}

/// 值扁平化：数组逗号拼接，null 为空串，其余转字符串（嵌套对象保留 JSON 文本）
fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(flatten_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

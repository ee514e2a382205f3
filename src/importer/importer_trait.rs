// ==========================================
// 智能数据导入 - 导入管道 Trait
// ==========================================
// 职责: 定义解析 / 映射 / 清洗三个可替换接口（不包含实现）
// 红线: 接口均为纯函数语义，不做 I/O，不返回错误
// ==========================================

use crate::config::target_registry::TargetSchema;
use crate::domain::{FieldMap, ParsedTable};
use chrono::NaiveDate;

// ==========================================
// TableParser Trait
// ==========================================
// 用途: 原始文本 → 统一表格结构（阶段 1）
// 实现者: TextTableParser
pub trait TableParser: Send + Sync {
    /// 解析原始文本
    ///
    /// # 参数
    /// - text: 用户粘贴或文件读取的原始文本
    /// - filename_hint: 可选文件名，仅作弱提示（如 .tsv 优先制表符）
    ///
    /// # 返回
    /// - ParsedTable: 任何输入都返回结果；无法识别时退化为纯文本
    fn parse(&self, text: &str, filename_hint: Option<&str>) -> ParsedTable;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 源字段名 → 目标字段映射（阶段 3）
// 实现者: GreedyFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 为指定目标生成字段映射
    ///
    /// # 保证
    /// - 每个目标字段至多出现一次
    /// - 每个源字段至多被一个目标字段占用
    /// - 无法映射的目标字段不出现在结果中
    fn map_fields(&self, source_fields: &[String], schema: &TargetSchema) -> FieldMap;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格字符串 → 类型化值（阶段 4 的原子转换）
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 标准化 NULL 值（None / 空白 → None）
    fn normalize_null(&self, value: Option<&str>) -> Option<String>;

    /// 清洗文本（TRIM）
    fn clean_text(&self, value: &str) -> String;

    /// 拆分列表（按 , ; | 拆分，去空白，丢弃空段）
    fn split_list(&self, value: &str) -> Vec<String>;

    /// 解析布尔（true/1/yes/on 为真，其余为假）
    fn parse_bool(&self, value: &str) -> bool;

    /// 解析数值（失败为 0）
    fn parse_number(&self, value: &str) -> f64;

    /// 解析日期（无法识别返回 None，由调用方决定缺省值）
    fn parse_date(&self, value: &str) -> Option<NaiveDate>;
}

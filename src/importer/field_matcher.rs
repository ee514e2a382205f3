// ==========================================
// 智能数据导入 - 字段名匹配规则
// ==========================================
// 职责: 字段名标准化 + 三级匹配（精确 / 别名 / 包含）
// 使用方: CategoryClassifier（评分）、GreedyFieldMapper（分轮映射）
// ==========================================

use crate::config::target_registry::FieldSpec;

// ==========================================
// 匹配等级
// ==========================================
// 顺序即优先级：Exact > Alias > Partial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,   // 标准化后完全相等
    Alias,   // 等于某个已登记别名
    Partial, // 任一方向的子串包含
}

impl MatchKind {
    /// 按优先级排列的匹配轮次
    pub const PASSES: [MatchKind; 3] = [MatchKind::Exact, MatchKind::Alias, MatchKind::Partial];
}

/// 字段名标准化：转小写，去掉 `_` `-` `.` `/` 与空白
///
/// # 示例
/// - "Due_Date" → "duedate"
/// - "e-mail address" → "emailaddress"
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | '.' | '/') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// ==========================================
// SourceKey - 已标准化的源字段
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey<'a> {
    pub original: &'a str,
    pub key: String,
}

/// 标准化源字段列表；标准化后为空的字段名（如 "_"、"--"）不参与任何匹配
pub fn source_keys(source_fields: &[String]) -> Vec<SourceKey<'_>> {
    source_fields
        .iter()
        .map(|original| SourceKey {
            original: original.as_str(),
            key: normalize_field_name(original),
        })
        .filter(|s| !s.key.is_empty())
        .collect()
}

/// 判断源字段（已标准化）是否按指定等级匹配目标字段
pub fn matches(kind: MatchKind, field: &FieldSpec, source_key: &str) -> bool {
    if source_key.is_empty() {
        return false;
    }

    let target_key = normalize_field_name(field.name);
    match kind {
        MatchKind::Exact => source_key == target_key,
        MatchKind::Alias => field
            .aliases
            .iter()
            .any(|alias| normalize_field_name(alias) == source_key),
        MatchKind::Partial => target_key.contains(source_key) || source_key.contains(&target_key),
    }
}

/// 目标字段在全部源字段中能达到的最高匹配等级
pub fn best_match(field: &FieldSpec, sources: &[SourceKey<'_>]) -> Option<MatchKind> {
    MatchKind::PASSES
        .into_iter()
        .find(|kind| sources.iter().any(|s| matches(*kind, field, &s.key)))
}

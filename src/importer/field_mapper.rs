// ==========================================
// 智能数据导入 - 字段映射器实现
// ==========================================
// 职责: 源字段名 → 目标字段名（一对一）
// 算法: 三轮贪心（精确 → 别名 → 包含），每轮按 schema 声明顺序，
//       每个目标字段取第一个可用的源字段；不回溯、不做全局最优
// ==========================================

use crate::config::target_registry::TargetSchema;
use crate::domain::FieldMap;
use crate::importer::field_matcher::{matches, source_keys, MatchKind};
use crate::importer::importer_trait::FieldMapper;
use tracing::debug;

pub struct GreedyFieldMapper;

impl FieldMapper for GreedyFieldMapper {
    fn map_fields(&self, source_fields: &[String], schema: &TargetSchema) -> FieldMap {
        let sources = source_keys(source_fields);
        let mut field_map = FieldMap::new();

        for kind in MatchKind::PASSES {
            for field in schema.fields() {
                if field_map.is_mapped(field.name) {
                    continue;
                }

                let candidate = sources
                    .iter()
                    .find(|s| !field_map.is_claimed(s.original) && matches(kind, field, &s.key));

                if let Some(source) = candidate {
                    debug!(
                        target_field = field.name,
                        source_field = source.original,
                        pass = ?kind,
                        "字段已映射"
                    );
                    field_map.bind(field.name, source.original);
                }
            }
        }

        field_map
    }
}

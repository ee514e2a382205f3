// ==========================================
// 智能数据导入 - 配置层
// ==========================================
// 职责: 目标 Schema 注册表（静态） + 导入调参配置（可覆写）
// ==========================================

pub mod import_config;
pub mod target_registry;

// 重导出
pub use import_config::{
    default_config_path, ConfidenceThresholds, ImportConfig, ScoringWeights, CONFIG_PATH_ENV,
};
pub use target_registry::{registry, schema, FieldDefault, FieldSpec, TargetSchema};

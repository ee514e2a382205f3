// ==========================================
// 智能数据导入 - API 层
// ==========================================
// 职责: 对外提供导入会话、重定向目标与模板接口
// ==========================================

pub mod import_api;

// 重导出核心类型
pub use import_api::{
    parse_target, read_source, template_for, ImportReport, ImportSession, SmartImporter, STDIN_PATH,
};

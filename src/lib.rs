// ==========================================
// 智能数据导入 - 核心库
// ==========================================
// 流程: 原始文本 → 表格解析 → 目标分类 → 字段映射 → 记录归一化
// 系统定位: 用户只确认或改选结果，不声明格式与字段映射
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 表格、记录与类型
pub mod domain;

// 配置层 - 目标注册表与评分配置
pub mod config;

// 导入层 - 解析 / 映射 / 清洗 / 归一化
pub mod importer;

// 引擎层 - 分类评分与置信等级
pub mod engine;

// API 层 - 导入会话
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CategoryScore, ConfidenceTier, FieldKind, FieldMap, FieldValue, NormalizedItem, ParsedRow,
    ParsedTable, SourceFormat, TargetId,
};

// 配置
pub use config::{registry, schema, ImportConfig, TargetSchema};

// 引擎
pub use engine::{CategoryClassifier, ConfidenceEvaluator};

// 导入层
pub use importer::{GreedyFieldMapper, ImportError, ImportResult, ItemNormalizer, TextTableParser};

// API
pub use api::{ImportReport, ImportSession, SmartImporter};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "智能数据导入";

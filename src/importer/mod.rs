// ==========================================
// 智能数据导入 - 导入层
// ==========================================
// 职责: 原始文本 → 表格 → 字段映射 → 类型化记录
// 支持: JSON / JSON Lines / CSV / TSV / 纯文本
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod field_matcher;
pub mod importer_trait;
pub mod item_normalizer;
pub mod table_parser;
pub mod template;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::GreedyFieldMapper;
pub use field_matcher::{normalize_field_name, MatchKind};
pub use item_normalizer::{ItemNormalizer, NormalizeOutcome};
pub use table_parser::{TextTableParser, PLAIN_TEXT_FIELD};

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, FieldMapper, TableParser};

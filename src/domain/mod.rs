// ==========================================
// 智能数据导入 - 领域模型层
// ==========================================
// 职责: 定义解析结果、映射结果、归一化记录与基础类型
// 红线: 不含解析/评分逻辑，不含 I/O
// ==========================================

pub mod item;
pub mod table;
pub mod types;

// 重导出核心类型
pub use item::{CategoryScore, FieldMap, FieldValue, NormalizedItem};
pub use table::{ParsedRow, ParsedTable};
pub use types::{ConfidenceTier, FieldKind, SourceFormat, TargetId};

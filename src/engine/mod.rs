// ==========================================
// 智能数据导入 - 引擎层
// ==========================================
// 职责: 目标分类评分 + 置信等级评估
// 红线: 引擎不做 I/O，只读注册表与配置
// ==========================================

pub mod category_classifier;
pub mod confidence;

// 重导出核心引擎
pub use category_classifier::CategoryClassifier;
pub use confidence::{score_for, ConfidenceEvaluator};

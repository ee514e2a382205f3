// ==========================================
// 智能数据导入 - 导入配置
// ==========================================
// 职责: 评分权重与置信阈值，支持 JSON 文件覆写
// 查找顺序: 环境变量 SMART_IMPORT_CONFIG → 用户配置目录 → 内置默认值
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "SMART_IMPORT_CONFIG";

// ==========================================
// ScoringWeights - 分类评分权重
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringWeights {
    pub exact_required: i32,
    pub exact_optional: i32,
    pub alias_required: i32,
    pub alias_optional: i32,
    pub partial_required: i32,
    pub partial_optional: i32,
    /// 必填字段完全无匹配时的扣分（正数，按扣减处理）
    pub missing_required_penalty: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_required: 10,
            exact_optional: 3,
            alias_required: 8,
            alias_optional: 2,
            partial_required: 5,
            partial_optional: 1,
            missing_required_penalty: 5,
        }
    }
}

impl ScoringWeights {
    fn named_values(&self) -> [(&'static str, i32); 7] {
        [
            ("scoring.exact_required", self.exact_required),
            ("scoring.exact_optional", self.exact_optional),
            ("scoring.alias_required", self.alias_required),
            ("scoring.alias_optional", self.alias_optional),
            ("scoring.partial_required", self.partial_required),
            ("scoring.partial_optional", self.partial_optional),
            ("scoring.missing_required_penalty", self.missing_required_penalty),
        ]
    }
}

// ==========================================
// ConfidenceThresholds - 置信等级阈值
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfidenceThresholds {
    /// High 等级要求的最低分
    pub high_min_score: i32,
    /// High 等级要求与次优目标的最小分差
    pub high_min_gap: i32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high_min_score: 15,
            high_min_gap: 5,
        }
    }
}

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImportConfig {
    pub scoring: ScoringWeights,
    pub confidence: ConfidenceThresholds,
}

impl ImportConfig {
    /// 加载配置
    ///
    /// # 逻辑
    /// 1. 环境变量指定路径：文件必须存在且合法
    /// 2. 用户配置目录下的 config.json：存在则读取
    /// 3. 否则使用默认值
    pub fn load() -> ImportResult<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Self::from_file(Path::new(trimmed));
            }
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("未找到配置文件，使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 从 JSON 文件读取
    pub fn from_file(path: &Path) -> ImportResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_json_str(&raw).map_err(|e| match e {
            ImportError::SerializeError(message) => ImportError::ConfigReadError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        info!(path = %path.display(), "已加载导入配置");
        Ok(config)
    }

    /// 从 JSON 文本解析（缺省字段取默认值）
    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        let config: ImportConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验：权重与阈值均不得为负
    pub fn validate(&self) -> ImportResult<()> {
        let thresholds = [
            ("confidence.high_min_score", self.confidence.high_min_score),
            ("confidence.high_min_gap", self.confidence.high_min_gap),
        ];

        for (key, value) in self.scoring.named_values().into_iter().chain(thresholds) {
            if value < 0 {
                return Err(ImportError::ConfigValueError {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: "不能为负数".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// 默认配置文件路径: <用户配置目录>/smart-import/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("smart-import").join("config.json"))
}

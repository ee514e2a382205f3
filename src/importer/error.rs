// ==========================================
// 智能数据导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 解析/评分/映射/归一化四个阶段本身不返回错误，
//       仅会话边界（无数据、未知目标、配置、文件读取）使用本类型
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 数据相关错误 =====
    #[error("未识别到可导入的数据")]
    NoDataDetected,

    #[error("未知导入目标: {0}")]
    UnknownTarget(String),

    // ===== 文件相关错误 =====
    #[error("文件读取失败 (path: {path}): {message}")]
    FileReadError { path: String, message: String },

    // ===== 配置错误 =====
    #[error("配置读取失败 (path: {path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 序列化错误 =====
    #[error("JSON 序列化/反序列化失败: {0}")]
    SerializeError(String),
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::SerializeError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_error_message() {
        let err = ImportError::FileReadError {
            path: "missing.csv".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "文件读取失败 (path: missing.csv): not found");
    }

    #[test]
    fn test_unknown_target_message() {
        let err = ImportError::UnknownTarget("bookmarks".to_string());
        assert_eq!(err.to_string(), "未知导入目标: bookmarks");
    }
}

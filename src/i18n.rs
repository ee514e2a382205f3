// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::TargetId;
use crate::importer::error::ImportError;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use smart_import::i18n::t;
/// let msg = t("import.no_data");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use smart_import::i18n::t_with_args;
/// let msg = t_with_args("import.file_read_failed", &[("path", "/tmp/test.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 面向用户的错误提示；没有对应文案的错误沿用其 Display
pub fn error_message(err: &ImportError) -> String {
    match err {
        ImportError::NoDataDetected => t("import.no_data"),
        ImportError::UnknownTarget(target) => {
            let available: Vec<&str> = TargetId::ALL.iter().map(|t| t.as_str()).collect();
            let available = available.join(", ");
            t_with_args(
                "import.unknown_target",
                &[("target", target.as_str()), ("available", available.as_str())],
            )
        }
        ImportError::FileReadError { path, message } => t_with_args(
            "import.file_read_failed",
            &[("path", path.as_str()), ("message", message.as_str())],
        ),
        other => other.to_string(),
    }
}

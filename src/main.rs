// ==========================================
// 智能数据导入 - 命令行入口
// ==========================================
// 用法:
//   smart-import <文件路径|-> [目标]     导入并输出 JSON 结果
//   smart-import --template <目标>      输出空白 CSV 模板
// ==========================================
// 结果写到 stdout，摘要与日志写到 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use smart_import::api::{parse_target, read_source, template_for, STDIN_PATH};
use smart_import::i18n::{self, t};
use smart_import::{logging, ImportConfig, ImportError, SmartImporter};

/// 界面语言环境变量（zh-CN / en）
const LOCALE_ENV: &str = "SMART_IMPORT_LOCALE";

fn main() -> Result<()> {
    logging::init();

    if let Ok(locale) = std::env::var(LOCALE_ENV) {
        i18n::set_locale(locale.trim());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag, target] if flag == "--template" => {
            let template = template_for(target).map_err(user_error)?;
            print!("{}", template);
            Ok(())
        }
        [input] if !input.starts_with("--") => run_import(input, None),
        [input, target] if !input.starts_with("--") => run_import(input, Some(target.as_str())),
        _ => {
            eprintln!("{}", t("cli.usage"));
            bail!("invalid arguments");
        }
    }
}

fn run_import(input: &str, target: Option<&str>) -> Result<()> {
    let text = read_source(input).map_err(user_error)?;
    let hint = (input != STDIN_PATH).then_some(input);

    let config = ImportConfig::load().context("failed to load import config")?;
    let importer = SmartImporter::new(config);

    let session = importer.start(&text, hint).map_err(user_error)?;
    let report = match target {
        Some(name) => session.run(parse_target(name).map_err(user_error)?),
        None => session.run_best(),
    };

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{}", json);
    eprintln!("{}", report.summary());
    Ok(())
}

fn user_error(err: ImportError) -> anyhow::Error {
    anyhow::anyhow!(i18n::error_message(&err))
}

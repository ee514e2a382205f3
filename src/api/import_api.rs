// ==========================================
// 智能数据导入 - 导入 API
// ==========================================
// 职责: 串联 解析 → 分类 → 映射 → 归一化 四个阶段
// 会话: 原始文本只解析一次；切换目标只重跑映射与归一化
// ==========================================

use crate::config::import_config::ImportConfig;
use crate::config::target_registry::schema;
use crate::domain::{
    CategoryScore, ConfidenceTier, FieldMap, NormalizedItem, ParsedTable, SourceFormat, TargetId,
};
use crate::engine::{score_for, CategoryClassifier, ConfidenceEvaluator};
use crate::i18n::{t, t_with_args};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::GreedyFieldMapper;
use crate::importer::importer_trait::{FieldMapper, TableParser};
use crate::importer::item_normalizer::ItemNormalizer;
use crate::importer::table_parser::TextTableParser;
use crate::importer::template;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use tracing::{info, instrument, warn};

/// 表示从标准输入读取的路径
pub const STDIN_PATH: &str = "-";

/// 导入结果
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// 导入目标
    pub target: TargetId,
    /// 置信等级
    pub confidence: ConfidenceTier,
    /// 该目标的分类得分
    pub score: i32,
    /// 通过必填校验的记录
    pub items: Vec<NormalizedItem>,
    /// 目标字段 → 源字段
    pub field_map: FieldMap,
    /// 解析得到的原始行数
    pub raw_row_count: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
    /// 识别出的源格式
    pub format: SourceFormat,
}

impl ImportReport {
    /// 本地化的单行摘要
    pub fn summary(&self) -> String {
        let confidence = t(&format!("confidence.{}", self.confidence.as_str()));
        let format = self.format.to_string();
        let accepted = self.accepted_count.to_string();
        let rejected = self.rejected_count.to_string();
        let rows = self.raw_row_count.to_string();
        t_with_args(
            "report.summary",
            &[
                ("target", self.target.as_str()),
                ("format", format.as_str()),
                ("confidence", confidence.as_str()),
                ("accepted", accepted.as_str()),
                ("rejected", rejected.as_str()),
                ("rows", rows.as_str()),
            ],
        )
    }
}

// ==========================================
// SmartImporter - 导入入口
// ==========================================
pub struct SmartImporter {
    parser: Box<dyn TableParser>,
    mapper: Box<dyn FieldMapper>,
    normalizer: ItemNormalizer,
    classifier: CategoryClassifier,
    confidence: ConfidenceEvaluator,
}

impl Default for SmartImporter {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}

impl SmartImporter {
    /// 使用默认解析器 / 映射器 / 归一化器创建
    pub fn new(config: ImportConfig) -> Self {
        Self::with_components(
            Box::new(TextTableParser),
            Box::new(GreedyFieldMapper),
            ItemNormalizer::default(),
            config,
        )
    }

    /// 注入自定义组件
    pub fn with_components(
        parser: Box<dyn TableParser>,
        mapper: Box<dyn FieldMapper>,
        normalizer: ItemNormalizer,
        config: ImportConfig,
    ) -> Self {
        Self {
            parser,
            mapper,
            normalizer,
            classifier: CategoryClassifier::new(config.scoring),
            confidence: ConfidenceEvaluator::new(config.confidence),
        }
    }

    /// 固定日期字段的缺省值
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.normalizer = self.normalizer.with_today(today);
        self
    }

    /// 解析并分类，开启一次导入会话
    ///
    /// # 返回
    /// - Err(NoDataDetected): 所有解析策略均未产出任何行
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn start(&self, text: &str, filename_hint: Option<&str>) -> ImportResult<ImportSession<'_>> {
        let table = self.parser.parse(text, filename_hint);
        if table.is_empty() {
            warn!("未识别到任何数据行");
            return Err(ImportError::NoDataDetected);
        }

        let ranking = self.classifier.classify(table.source_fields());
        info!(
            format = %table.format(),
            rows = table.row_count(),
            top = ?ranking.first(),
            "导入会话已建立"
        );

        Ok(ImportSession {
            importer: self,
            table,
            ranking,
        })
    }

    /// 一次性导入：自动选择得分最高的目标
    pub fn import_text(&self, text: &str, filename_hint: Option<&str>) -> ImportResult<ImportReport> {
        Ok(self.start(text, filename_hint)?.run_best())
    }
}

// ==========================================
// ImportSession - 导入会话
// ==========================================
// 持有不可变的解析结果与分类排名
pub struct ImportSession<'a> {
    importer: &'a SmartImporter,
    table: ParsedTable,
    ranking: Vec<CategoryScore>,
}

impl ImportSession<'_> {
    pub fn table(&self) -> &ParsedTable {
        &self.table
    }

    /// 全部目标按得分降序
    pub fn ranking(&self) -> &[CategoryScore] {
        &self.ranking
    }

    /// 得分最高的目标
    pub fn top_target(&self) -> TargetId {
        self.ranking
            .first()
            .map_or(TargetId::ALL[0], |score| score.target)
    }

    /// 以指定目标映射并归一化
    #[instrument(skip(self), fields(rows = self.table.row_count()))]
    pub fn run(&self, target: TargetId) -> ImportReport {
        let schema = schema(target);
        let field_map = self
            .importer
            .mapper
            .map_fields(self.table.source_fields(), schema);
        let outcome = self
            .importer
            .normalizer
            .normalize(self.table.rows(), schema, &field_map);

        let accepted_count = outcome.items.len();
        let confidence = self
            .importer
            .confidence
            .evaluate(target, &self.ranking, accepted_count);

        info!(
            target = %target,
            confidence = %confidence,
            accepted = accepted_count,
            rejected = outcome.rejected,
            "导入完成"
        );

        ImportReport {
            target,
            confidence,
            score: score_for(target, &self.ranking),
            items: outcome.items,
            field_map,
            raw_row_count: self.table.row_count(),
            accepted_count,
            rejected_count: outcome.rejected,
            format: self.table.format(),
        }
    }

    /// 以得分最高的目标运行
    pub fn run_best(&self) -> ImportReport {
        self.run(self.top_target())
    }

    /// 以目标名称（如 "tasks"）运行
    pub fn run_named(&self, target: &str) -> ImportResult<ImportReport> {
        Ok(self.run(parse_target(target)?))
    }
}

/// 解析目标名称；未知名称返回 UnknownTarget
pub fn parse_target(name: &str) -> ImportResult<TargetId> {
    TargetId::from_str(name)
        .ok_or_else(|| ImportError::UnknownTarget(name.to_string()))
}

/// 读取导入源文本；"-" 表示标准输入
pub fn read_source(path: &str) -> ImportResult<String> {
    let read_failed = |err: std::io::Error| ImportError::FileReadError {
        path: path.to_string(),
        message: err.to_string(),
    };

    if path == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(read_failed)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(read_failed)
}

/// 按目标名称生成空白模板
pub fn template_for(target: &str) -> ImportResult<String> {
    Ok(template::generate(schema(parse_target(target)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn importer() -> SmartImporter {
        SmartImporter::default().with_today(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let importer = importer();
        assert!(matches!(
            importer.start("", None),
            Err(ImportError::NoDataDetected)
        ));
        assert!(matches!(
            importer.start("  \n\t\n", None),
            Err(ImportError::NoDataDetected)
        ));
    }

    #[test]
    fn test_session_reports_row_count_and_format() {
        let importer = importer();
        let session = importer.start("name,url\nBlog,https://blog.com", None).unwrap();

        assert_eq!(session.table().format(), SourceFormat::Csv);
        assert_eq!(session.top_target(), TargetId::Websites);

        let report = session.run_best();
        assert_eq!(report.raw_row_count, 1);
        assert_eq!(report.accepted_count, 1);
        assert_eq!(report.rejected_count, 0);
        assert_eq!(report.score, 20);
        assert_eq!(report.confidence, ConfidenceTier::High);
    }

    #[test]
    fn test_run_named_unknown_target() {
        let importer = importer();
        let session = importer.start("a,b\n1,2", None).unwrap();

        match session.run_named("recipes") {
            Err(ImportError::UnknownTarget(name)) => assert_eq!(name, "recipes"),
            other => panic!("unexpected: {:?}", other.map(|r| r.target)),
        }
        assert_eq!(session.run_named(" Tasks ").unwrap().target, TargetId::Tasks);
    }

    #[test]
    fn test_read_source_missing_file() {
        match read_source("/nonexistent/dir/input.csv") {
            Err(ImportError::FileReadError { path, message }) => {
                assert_eq!(path, "/nonexistent/dir/input.csv");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_read_source_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name,url\nBlog,https://blog.com").unwrap();

        let text = read_source(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "name,url\nBlog,https://blog.com");
    }

    #[test]
    fn test_template_for() {
        assert!(template_for("expenses").unwrap().starts_with("description,amount,"));
        assert!(matches!(
            template_for("nope"),
            Err(ImportError::UnknownTarget(_))
        ));
    }

    #[test]
    fn test_report_serializes_items_in_schema_order() {
        let importer = importer();
        let report = importer
            .import_text("name,url\nBlog,https://blog.com", Some("sites.csv"))
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["target"], "websites");
        assert_eq!(json["format"], "csv");
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["field_map"]["url"], "url");
        let item = json["items"][0].as_object().unwrap();
        let keys: Vec<&str> = item.keys().map(String::as_str).collect();
        assert_eq!(&keys[..3], &["name", "url", "category"]);
        assert_eq!(item["created_at"], "2025-01-20");
    }
}

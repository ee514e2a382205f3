// ==========================================
// 智能数据导入 - 目标分类引擎
// ==========================================
// 职责: 源字段名 → 全部目标类型的得分排名
// 规则: 每个目标字段只按最佳匹配等级计分一次；
//       必填字段三级均未匹配时扣分
// 红线: 评分是启发式，不做全局最优分配；
//       同一源字段可同时满足多个目标字段的包含规则
// ==========================================
// 平分处理: 稳定排序，保持注册表顺序
// ==========================================

use crate::config::import_config::ScoringWeights;
use crate::config::target_registry::{registry, TargetSchema};
use crate::domain::CategoryScore;
use crate::importer::field_matcher::{best_match, source_keys, MatchKind, SourceKey};
use tracing::{debug, instrument};

// ==========================================
// CategoryClassifier - 目标分类引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    weights: ScoringWeights,
}

impl CategoryClassifier {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// 对注册表中全部目标评分，按得分降序返回
    #[instrument(skip(self, source_fields), fields(fields = source_fields.len()))]
    pub fn classify(&self, source_fields: &[String]) -> Vec<CategoryScore> {
        let sources = source_keys(source_fields);

        let mut ranking: Vec<CategoryScore> = registry()
            .iter()
            .map(|schema| CategoryScore {
                target: schema.id,
                score: self.score_keys(schema, &sources),
            })
            .collect();

        // sort_by 为稳定排序，平分时保持注册表顺序
        ranking.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(ranking = ?ranking, "目标分类完成");
        ranking
    }

    /// 单个目标的得分
    pub fn score(&self, schema: &TargetSchema, source_fields: &[String]) -> i32 {
        self.score_keys(schema, &source_keys(source_fields))
    }

    fn score_keys(&self, schema: &TargetSchema, sources: &[SourceKey<'_>]) -> i32 {
        schema
            .fields()
            .map(|field| {
                let required = schema.is_required(field.name);
                match best_match(field, sources) {
                    Some(kind) => self.weight(kind, required),
                    None if required => -self.weights.missing_required_penalty,
                    None => 0,
                }
            })
            .sum()
    }

    fn weight(&self, kind: MatchKind, required: bool) -> i32 {
        let w = &self.weights;
        match (kind, required) {
            (MatchKind::Exact, true) => w.exact_required,
            (MatchKind::Exact, false) => w.exact_optional,
            (MatchKind::Alias, true) => w.alias_required,
            (MatchKind::Alias, false) => w.alias_optional,
            (MatchKind::Partial, true) => w.partial_required,
            (MatchKind::Partial, false) => w.partial_optional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema;
    use crate::domain::TargetId;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn score_of(ranking: &[CategoryScore], target: TargetId) -> i32 {
        ranking
            .iter()
            .find(|s| s.target == target)
            .map(|s| s.score)
            .unwrap()
    }

    #[test]
    fn test_every_target_ranked() {
        let ranking = CategoryClassifier::default().classify(&fields(&["foo"]));
        assert_eq!(ranking.len(), TargetId::ALL.len());
    }

    #[test]
    fn test_website_headers_rank_websites_first() {
        let ranking = CategoryClassifier::default().classify(&fields(&["name", "url"]));

        assert_eq!(ranking[0].target, TargetId::Websites);
        assert_eq!(ranking[0].score, 20);
        assert_eq!(score_of(&ranking, TargetId::Tasks), 10);
        assert_eq!(score_of(&ranking, TargetId::Credentials), 11);
        assert_eq!(score_of(&ranking, TargetId::Contacts), 10);
        assert_eq!(score_of(&ranking, TargetId::Notes), -3);
        assert_eq!(score_of(&ranking, TargetId::Expenses), -10);
    }

    #[test]
    fn test_alias_scoring_favours_tasks() {
        let ranking = CategoryClassifier::default().classify(&fields(&["title", "priority"]));

        assert_eq!(ranking[0].target, TargetId::Tasks);
        assert_eq!(ranking[0].score, 11);
        assert_eq!(score_of(&ranking, TargetId::Websites), 3);
    }

    #[test]
    fn test_missing_required_penalty() {
        let classifier = CategoryClassifier::default();
        // expenses: description / amount 均无匹配
        assert_eq!(classifier.score(schema(TargetId::Expenses), &fields(&["zzz"])), -10);
        // credentials: 三个必填字段均无匹配
        assert_eq!(classifier.score(schema(TargetId::Credentials), &fields(&["zzz"])), -15);
    }

    #[test]
    fn test_field_scored_once_by_best_rule() {
        let classifier = CategoryClassifier::default();
        // "url" 精确 + "link" 别名同时存在时，url 只按精确计 10 分
        let exact_only = classifier.score(schema(TargetId::Websites), &fields(&["name", "url"]));
        let with_alias =
            classifier.score(schema(TargetId::Websites), &fields(&["name", "url", "link"]));
        assert_eq!(exact_only, with_alias);
    }

    #[test]
    fn test_ties_keep_registry_order() {
        let ranking = CategoryClassifier::default().classify(&fields(&["item"]));

        // tasks / contacts / notes 同为 -5，按注册表顺序排列
        let tied: Vec<TargetId> = ranking
            .iter()
            .filter(|s| s.score == -5)
            .map(|s| s.target)
            .collect();
        assert_eq!(tied, vec![TargetId::Tasks, TargetId::Contacts, TargetId::Notes]);
        assert_eq!(ranking[0].target, TargetId::Tasks);
    }

    #[test]
    fn test_empty_normalized_source_ignored() {
        let classifier = CategoryClassifier::default();
        let with_junk = classifier.classify(&fields(&["name", "url", "__", " "]));
        let clean = classifier.classify(&fields(&["name", "url"]));
        assert_eq!(with_junk, clean);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            missing_required_penalty: 0,
            ..ScoringWeights::default()
        };
        let classifier = CategoryClassifier::new(weights);
        assert_eq!(classifier.score(schema(TargetId::Expenses), &fields(&["zzz"])), 0);
    }

    #[test]
    fn test_full_field_list_ranks_own_target_first() {
        let classifier = CategoryClassifier::default();
        for target in TargetId::ALL {
            let own: Vec<String> = schema(target).fields().map(|f| f.name.to_string()).collect();
            let ranking = classifier.classify(&own);
            assert_eq!(ranking[0].target, target, "{:?}", ranking);
        }
    }

    #[test]
    fn test_shared_required_name_tie_resolved_by_registry_order() {
        // tasks 与 contacts 的唯一必填字段都是 name，同为 10 分
        let ranking = CategoryClassifier::default().classify(&fields(&["name"]));
        assert_eq!(ranking[0], CategoryScore { target: TargetId::Tasks, score: 10 });
        assert_eq!(ranking[1], CategoryScore { target: TargetId::Contacts, score: 10 });
    }
}

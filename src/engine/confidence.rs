// ==========================================
// 智能数据导入 - 置信等级评估
// ==========================================
// 规则（按序判定）:
//   1. 产出 0 条记录，或得分 ≤ 0 → Low
//   2. 得分 ≥ high_min_score 且与次优目标分差 ≥ high_min_gap → High
//   3. 其余 → Medium
// 红线: 仅为展示层分级，不影响分类与归一化结果
// ==========================================

use crate::config::import_config::ConfidenceThresholds;
use crate::domain::{CategoryScore, ConfidenceTier, TargetId};

#[derive(Debug, Clone, Default)]
pub struct ConfidenceEvaluator {
    thresholds: ConfidenceThresholds,
}

impl ConfidenceEvaluator {
    pub fn new(thresholds: ConfidenceThresholds) -> Self {
        Self { thresholds }
    }

    /// 评估所选目标的置信等级
    ///
    /// # 参数
    /// - target: 所选目标（可能不是排名第一的目标）
    /// - ranking: 分类结果
    /// - item_count: 归一化后接受的记录数
    pub fn evaluate(
        &self,
        target: TargetId,
        ranking: &[CategoryScore],
        item_count: usize,
    ) -> ConfidenceTier {
        let score = score_for(target, ranking);
        if item_count == 0 || score <= 0 {
            return ConfidenceTier::Low;
        }

        let runner_up = ranking
            .iter()
            .filter(|s| s.target != target)
            .map(|s| s.score)
            .max();
        let gap = runner_up.map_or(score, |other| score - other);

        if score >= self.thresholds.high_min_score && gap >= self.thresholds.high_min_gap {
            ConfidenceTier::High
        } else {
            ConfidenceTier::Medium
        }
    }
}

/// 目标在排名中的得分；不在排名中视为 0
pub fn score_for(target: TargetId, ranking: &[CategoryScore]) -> i32 {
    ranking
        .iter()
        .find(|s| s.target == target)
        .map_or(0, |s| s.score)
}

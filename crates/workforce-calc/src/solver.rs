//! 人力配置精確求解器

use workforce_core::{OptimizationParams, Solution};

use crate::corner::{CornerCalculator, CornerPoint};
use crate::{OptimizationReport, OptimizationWarning};

/// 人力配置最佳化器
///
/// 以二維線性規劃角點法求解：產生固定候選角點、過濾可行點、
/// 挑選產量最大者，再取整重算。每次求解都是輸入的純函數，
/// 不同參數的求解可以無協調地並行執行。
pub struct WorkforceOptimizer {
    /// 最佳化參數
    params: OptimizationParams,
}

impl WorkforceOptimizer {
    /// 創建新的最佳化器
    pub fn new(params: OptimizationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OptimizationParams {
        &self.params
    }

    /// 主最佳化入口
    pub fn calculate(&self) -> OptimizationReport {
        tracing::info!(
            "開始人力配置最佳化：預算 {}，最低產量 {}，人數上限 ({}, {})",
            self.params.budget,
            self.params.min_production,
            self.params.max_skilled_workers,
            self.params.max_semi_skilled_workers
        );

        let start_time = std::time::Instant::now();
        let mut warnings = Vec::new();

        // Step 1: 產生候選角點
        tracing::debug!("Step 1: 產生候選角點");
        let candidates = CornerCalculator::generate_candidates(&self.params);
        tracing::debug!("候選角點數量: {}", candidates.len());

        // Step 2: 過濾可行角點
        tracing::debug!("Step 2: 過濾可行角點");
        let feasible = CornerCalculator::filter_feasible(&self.params, &candidates);
        tracing::debug!("可行角點數量: {}", feasible.len());

        // Step 3: 挑選產量最大的角點（嚴格大於，平手時先產生者勝出）
        tracing::debug!("Step 3: 挑選最佳角點");
        let best = Self::select_best(&self.params, &feasible);

        // Step 4: 取整並由整數人數重算產量與預算
        tracing::debug!("Step 4: 取整並重算");
        let solution = match best {
            Some(point) => {
                let skilled = point.skilled.round() as u32;
                let semi_skilled = point.semi_skilled.round() as u32;
                let solution = Solution::new(&self.params, skilled, semi_skilled);

                // 取整可能讓原本可行的連續解偏離可行域
                if !solution.feasible {
                    warnings.push(OptimizationWarning::warning(format!(
                        "取整後的解 ({}, {}) 偏離可行域：已用預算 {}，產量 {}",
                        skilled, semi_skilled, solution.budget_used, solution.total_production
                    )));
                }

                solution
            }
            None => {
                // 無可行角點：回傳人數上限點作為盡力而為的備援解，
                // 不再檢查預算與最低產量，欄位可能違反約束
                warnings.push(OptimizationWarning::error(
                    "問題不可行，回傳人數上限點作為備援解".to_string(),
                ));

                Solution::new(
                    &self.params,
                    self.params.max_skilled_workers,
                    self.params.max_semi_skilled_workers,
                )
            }
        };

        tracing::info!(
            "最佳化完成，耗時 {:?}：技術 {} 人，半技術 {} 人，產量 {}",
            start_time.elapsed(),
            solution.skilled_workers,
            solution.semi_skilled_workers,
            solution.total_production
        );

        OptimizationReport {
            solution,
            candidate_count: candidates.len(),
            feasible_count: feasible.len(),
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        }
    }

    /// 便利函式：直接求解取得配置結果
    pub fn solve(params: &OptimizationParams) -> Solution {
        Self::new(params.clone()).calculate().solution
    }

    /// 在可行角點中挑選產量最大者
    ///
    /// 累計值由 (0, 0) / 產量 0 起算並使用嚴格大於，
    /// 因此全部可行角點產量皆為 0 時結果為原點。
    fn select_best(params: &OptimizationParams, feasible: &[CornerPoint]) -> Option<CornerPoint> {
        if feasible.is_empty() {
            return None;
        }

        let mut best = CornerPoint::new(0.0, 0.0);
        let mut max_production = 0.0;

        for point in feasible {
            let production = params.production_of(point.skilled, point.semi_skilled);
            if production > max_production {
                max_production = production;
                best = *point;
            }
        }

        Some(best)
    }
}

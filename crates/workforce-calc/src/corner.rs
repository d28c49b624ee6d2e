//! 角點候選產生與過濾
//!
//! 連續鬆弛問題的可行域是由四類約束（非負、人數上限、預算線、
//! 最低產量線）圍成的凸多邊形，線性目標的最大值落在頂點上。
//! 此處不做一般性的頂點枚舉，而是產生固定的候選點集合，
//! 再以全部四類約束過濾。

use workforce_core::OptimizationParams;

/// 候選角點（連續座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPoint {
    /// 技術工人數（連續值）
    pub skilled: f64,

    /// 半技術工人數（連續值）
    pub semi_skilled: f64,
}

impl CornerPoint {
    pub fn new(skilled: f64, semi_skilled: f64) -> Self {
        Self {
            skilled,
            semi_skilled,
        }
    }
}

/// 角點計算器
pub struct CornerCalculator;

impl CornerCalculator {
    /// 產生固定候選角點集合
    ///
    /// 產生順序即為平手時的優先順序（挑選階段使用嚴格大於，
    /// 先產生者勝出）：
    ///
    /// 1. 原點
    /// 2. 預算線與兩座標軸的交點
    /// 3. 預算線與兩條人數上限線的交點
    /// 4. 最低產量線與兩座標軸的交點
    /// 5. 最低產量線與兩條人數上限線的交點
    /// 6. 人數上限點
    ///
    /// 除數不為正的交點直接省略（零成本/零產量類別沒有對應軸截距），
    /// 不視為錯誤。
    pub fn generate_candidates(params: &OptimizationParams) -> Vec<CornerPoint> {
        let max_skilled = f64::from(params.max_skilled_workers);
        let max_semi = f64::from(params.max_semi_skilled_workers);

        let mut candidates = Vec::new();

        // 原點
        candidates.push(CornerPoint::new(0.0, 0.0));

        // 預算線 skilled_cost·x + semi_skilled_cost·y = budget 與座標軸的交點
        if params.skilled_cost > 0.0 {
            candidates.push(CornerPoint::new(params.budget / params.skilled_cost, 0.0));
        }
        if params.semi_skilled_cost > 0.0 {
            candidates.push(CornerPoint::new(0.0, params.budget / params.semi_skilled_cost));
        }

        // 預算線與人數上限線的交點
        if params.skilled_cost > 0.0 && params.semi_skilled_cost > 0.0 {
            // 與 x = max_skilled_workers 的交點
            let y = (params.budget - params.skilled_cost * max_skilled) / params.semi_skilled_cost;
            if y >= 0.0 {
                candidates.push(CornerPoint::new(max_skilled, y));
            }

            // 與 y = max_semi_skilled_workers 的交點
            let x = (params.budget - params.semi_skilled_cost * max_semi) / params.skilled_cost;
            if x >= 0.0 {
                candidates.push(CornerPoint::new(x, max_semi));
            }
        }

        // 最低產量線 skilled_production·x + semi_skilled_production·y = min_production
        // 與座標軸的交點
        if params.skilled_production > 0.0 {
            candidates.push(CornerPoint::new(
                params.min_production / params.skilled_production,
                0.0,
            ));
        }
        if params.semi_skilled_production > 0.0 {
            candidates.push(CornerPoint::new(
                0.0,
                params.min_production / params.semi_skilled_production,
            ));
        }

        // 最低產量線與人數上限線的交點
        if params.skilled_production > 0.0 && params.semi_skilled_production > 0.0 {
            let y = (params.min_production - params.skilled_production * max_skilled)
                / params.semi_skilled_production;
            if y >= 0.0 {
                candidates.push(CornerPoint::new(max_skilled, y));
            }

            let x = (params.min_production - params.semi_skilled_production * max_semi)
                / params.skilled_production;
            if x >= 0.0 {
                candidates.push(CornerPoint::new(x, max_semi));
            }
        }

        // 人數上限點
        candidates.push(CornerPoint::new(max_skilled, max_semi));

        candidates
    }

    /// 過濾出滿足全部四類約束的角點
    ///
    /// 每個候選點都檢查全部約束，不只檢查產生它的那一條；
    /// 比較不帶容差，與線性式的浮點運算結果嚴格比對。
    pub fn filter_feasible(
        params: &OptimizationParams,
        candidates: &[CornerPoint],
    ) -> Vec<CornerPoint> {
        let max_skilled = f64::from(params.max_skilled_workers);
        let max_semi = f64::from(params.max_semi_skilled_workers);

        candidates
            .iter()
            .copied()
            .filter(|p| {
                // 非負約束
                if p.skilled < 0.0 || p.semi_skilled < 0.0 {
                    return false;
                }

                // 人數上限約束
                if p.skilled > max_skilled || p.semi_skilled > max_semi {
                    return false;
                }

                // 預算約束
                if params.cost_of(p.skilled, p.semi_skilled) > params.budget {
                    return false;
                }

                // 最低產量約束
                if params.production_of(p.skilled, p.semi_skilled) < params.min_production {
                    return false;
                }

                true
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_candidates_full_set() {
        // 預設參數下所有除數皆為正，產生完整的候選集合：
        // 原點 + 2 預算截距 + 最低產量 2 截距 + 上限點 = 6，
        // 加上座標為非負的線交點
        let params = OptimizationParams::default();
        let candidates = CornerCalculator::generate_candidates(&params);

        assert_eq!(candidates[0], CornerPoint::new(0.0, 0.0));
        assert!(candidates.contains(&CornerPoint::new(20.0, 0.0))); // 6000/300
        assert!(candidates.contains(&CornerPoint::new(0.0, 40.0))); // 6000/150
        assert!(candidates.contains(&CornerPoint::new(10.0, 0.0))); // 100/10
        assert!(candidates.contains(&CornerPoint::new(0.0, 25.0))); // 100/4
        assert_eq!(
            *candidates.last().unwrap(),
            CornerPoint::new(30.0, 60.0)
        );
    }

    #[test]
    fn test_generate_candidates_skips_negative_intersections() {
        // 預算 6000：預算線與 x=30 的交點 y=(6000-9000)/150 為負，應略過
        let params = OptimizationParams::default();
        let candidates = CornerCalculator::generate_candidates(&params);

        assert!(!candidates
            .iter()
            .any(|p| p.skilled == 30.0 && p.semi_skilled < 0.0));
        assert!(!candidates
            .iter()
            .any(|p| p.semi_skilled == 60.0 && p.skilled < 0.0));
    }

    #[test]
    fn test_generate_candidates_zero_cost_category() {
        // 零成本類別沒有預算軸截距，也沒有預算線交點
        let mut params = OptimizationParams::default();
        params.skilled_cost = 0.0;

        let candidates = CornerCalculator::generate_candidates(&params);

        // 仍有原點、半技術預算截距、產量截距、上限點
        assert_eq!(candidates[0], CornerPoint::new(0.0, 0.0));
        assert!(candidates.contains(&CornerPoint::new(0.0, 40.0)));
        assert!(candidates.contains(&CornerPoint::new(30.0, 60.0)));

        // 不存在 budget/skilled_cost 截距（除數非正）
        assert!(!candidates.iter().any(|p| p.skilled.is_infinite()));
    }

    #[test]
    fn test_filter_feasible_worked_example() {
        // 預設參數：(20, 0) 可行，(0, 40) 產量 160 亦可行，
        // (30, 60) 成本 18000 超出預算
        let params = OptimizationParams::default();
        let candidates = CornerCalculator::generate_candidates(&params);
        let feasible = CornerCalculator::filter_feasible(&params, &candidates);

        assert!(feasible.contains(&CornerPoint::new(20.0, 0.0)));
        assert!(feasible.contains(&CornerPoint::new(0.0, 40.0)));
        assert!(!feasible.contains(&CornerPoint::new(30.0, 60.0)));

        // 原點產量 0 < 100，不可行
        assert!(!feasible.contains(&CornerPoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_filter_feasible_empty_when_budget_zero() {
        // 預算 0 且最低產量 100：僅原點滿足預算，但原點產量不足
        let params = OptimizationParams::default().with_budget(0.0);
        let candidates = CornerCalculator::generate_candidates(&params);
        let feasible = CornerCalculator::filter_feasible(&params, &candidates);

        assert!(feasible.is_empty());
    }

    #[test]
    fn test_filter_checks_all_constraints() {
        // 最低產量截距 (10, 0) 由產量線產生，仍須通過預算檢查
        let params = OptimizationParams::default().with_budget(2000.0);
        let candidates = CornerCalculator::generate_candidates(&params);
        let feasible = CornerCalculator::filter_feasible(&params, &candidates);

        // (10, 0) 成本 3000 > 2000，應被預算約束剔除
        assert!(!feasible.contains(&CornerPoint::new(10.0, 0.0)));
    }
}

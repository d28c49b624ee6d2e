//! 求解器性質測試

use proptest::prelude::*;
use workforce_calc::{SensitivityAnalyzer, WorkforceOptimizer};
use workforce_core::OptimizationParams;

/// 成本與產量率皆為正的參數空間
fn positive_params() -> impl Strategy<Value = OptimizationParams> {
    (
        1.0f64..500.0,
        1.0f64..500.0,
        1.0f64..100.0,
        1.0f64..100.0,
        0.0f64..50_000.0,
        0.0f64..2_000.0,
        0u32..40,
        0u32..40,
    )
        .prop_map(
            |(sc, ssc, sp, ssp, budget, min_production, max_s, max_ss)| {
                OptimizationParams::new(sc, ssc, sp, ssp)
                    .with_budget(budget)
                    .with_min_production(min_production)
                    .with_max_skilled_workers(max_s)
                    .with_max_semi_skilled_workers(max_ss)
            },
        )
}

/// 人數方格內是否存在同時滿足預算與最低產量的整數點
fn integer_feasible_point_exists(params: &OptimizationParams) -> bool {
    (0..=params.max_skilled_workers).any(|s| {
        (0..=params.max_semi_skilled_workers).any(|ss| {
            let s = f64::from(s);
            let ss = f64::from(ss);
            params.cost_of(s, ss) <= params.budget
                && params.production_of(s, ss) >= params.min_production
        })
    })
}

proptest! {
    /// 解的人數永不超過各自的上限
    #[test]
    fn prop_counts_within_caps(params in positive_params()) {
        let solution = WorkforceOptimizer::solve(&params);

        prop_assert!(solution.skilled_workers <= params.max_skilled_workers);
        prop_assert!(solution.semi_skilled_workers <= params.max_semi_skilled_workers);
        prop_assert_eq!(
            solution.total_workers,
            solution.skilled_workers + solution.semi_skilled_workers
        );
    }

    /// 方格內存在可行整數點時，永不走備援路徑
    #[test]
    fn prop_no_fallback_when_feasible_point_exists(params in positive_params()) {
        prop_assume!(integer_feasible_point_exists(&params));

        let report = WorkforceOptimizer::new(params).calculate();
        prop_assert!(report.feasible_count > 0);
    }

    /// 敏感度掃描的人數同樣受上限約束
    #[test]
    fn prop_sensitivity_counts_within_caps(
        params in positive_params(),
        test_budget in 0.0f64..50_000.0,
    ) {
        let point = SensitivityAnalyzer::solve_with_budget(&params, test_budget);

        prop_assert!(point.skilled_workers <= params.max_skilled_workers);
        prop_assert!(point.semi_skilled_workers <= params.max_semi_skilled_workers);
    }

    /// 最低產量大於零時，零預算必回傳零解
    #[test]
    fn prop_zero_budget_is_zero_point(params in positive_params()) {
        prop_assume!(params.min_production > 0.0);

        let point = SensitivityAnalyzer::solve_with_budget(&params, 0.0);

        prop_assert_eq!(point.skilled_workers, 0);
        prop_assert_eq!(point.semi_skilled_workers, 0);
        prop_assert_eq!(point.production, 0.0);
    }

    /// 最低產量為零（不觸發窮舉備援）時，貪婪產量隨預算單調不減
    #[test]
    fn prop_greedy_production_monotone(
        params in positive_params(),
        budget_a in 0.0f64..25_000.0,
        delta in 0.0f64..25_000.0,
    ) {
        let params = params.with_min_production(0.0);

        let low = SensitivityAnalyzer::solve_with_budget(&params, budget_a);
        let high = SensitivityAnalyzer::solve_with_budget(&params, budget_a + delta);

        prop_assert!(high.production >= low.production);
    }
}

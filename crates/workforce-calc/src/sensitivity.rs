//! 預算敏感度分析
//!
//! 對一串測試預算逐一求近似解，產生預算-產量曲線。
//! 這裡刻意不重用角點法，而是採用較便宜的貪婪配置加窮舉備援，
//! 同一預算下的結果不保證與精確求解器一致；這是設計上接受的
//! 性質，呼叫端不應依賴兩者相等。

use rayon::prelude::*;
use workforce_core::{OptimizationParams, SensitivityPoint};

/// 敏感度分析器
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// 以單一測試預算求近似解
    ///
    /// 先依效率比（單位成本產量）貪婪填滿較有效率的類別，
    /// 餘額再配給另一類別；若產量未達最低要求，改用窮舉掃描。
    /// 兩類別仍無法達標時回傳零解而非錯誤。
    pub fn solve_with_budget(params: &OptimizationParams, test_budget: f64) -> SensitivityPoint {
        let max_skilled = f64::from(params.max_skilled_workers);
        let max_semi = f64::from(params.max_semi_skilled_workers);

        // 效率比：成本為零時為無窮大，比較與截斷皆有定義，不會 panic
        let skilled_efficiency = params.skilled_efficiency();
        let semi_skilled_efficiency = params.semi_skilled_efficiency();

        let (skilled, semi_skilled) = if skilled_efficiency >= semi_skilled_efficiency {
            // 技術工人較有效率，優先配置
            let skilled = max_skilled.min((test_budget / params.skilled_cost).floor());
            let remaining = test_budget - skilled * params.skilled_cost;
            let semi = max_semi.min((remaining / params.semi_skilled_cost).floor());
            (skilled, semi)
        } else {
            // 半技術工人較有效率，優先配置
            let semi = max_semi.min((test_budget / params.semi_skilled_cost).floor());
            let remaining = test_budget - semi * params.semi_skilled_cost;
            let skilled = max_skilled.min((remaining / params.skilled_cost).floor());
            (skilled, semi)
        };

        let skilled = skilled as u32;
        let semi_skilled = semi_skilled as u32;
        let production = params.production_of(f64::from(skilled), f64::from(semi_skilled));

        // 貪婪解已達最低產量即可回傳
        if production >= params.min_production {
            return SensitivityPoint::new(test_budget, skilled, semi_skilled, production);
        }

        Self::exhaustive_allocation(params, test_budget)
    }

    /// 窮舉備援：掃描所有買得起的技術工人數
    ///
    /// 每個技術工人數配上餘額可負擔的最多半技術工人，
    /// 追蹤達到最低產量中產量最高的組合。
    fn exhaustive_allocation(params: &OptimizationParams, test_budget: f64) -> SensitivityPoint {
        let max_semi = f64::from(params.max_semi_skilled_workers);
        let affordable =
            f64::from(params.max_skilled_workers).min((test_budget / params.skilled_cost).floor());
        let upper = affordable as u32;

        let mut best_production = 0.0;
        let mut best_skilled = 0;
        let mut best_semi = 0;

        for s in 0..=upper {
            let remaining = test_budget - f64::from(s) * params.skilled_cost;
            let sm = max_semi.min((remaining / params.semi_skilled_cost).floor()) as u32;

            let production = params.production_of(f64::from(s), f64::from(sm));

            if production >= params.min_production && production > best_production {
                best_production = production;
                best_skilled = s;
                best_semi = sm;
            }
        }

        SensitivityPoint::new(test_budget, best_skilled, best_semi, best_production)
    }

    /// 掃描一串測試預算
    ///
    /// 預算序列由呼叫端提供，任何有限的非負序列皆可；
    /// 空序列產生空曲線。
    pub fn sweep(params: &OptimizationParams, budgets: &[f64]) -> Vec<SensitivityPoint> {
        budgets
            .iter()
            .map(|&b| Self::solve_with_budget(params, b))
            .collect()
    }

    /// 平行掃描
    ///
    /// 每個測試預算的求解互相獨立且無共享狀態，
    /// 輸出順序與輸入序列一致。
    pub fn sweep_par(params: &OptimizationParams, budgets: &[f64]) -> Vec<SensitivityPoint> {
        budgets
            .par_iter()
            .map(|&b| Self::solve_with_budget(params, b))
            .collect()
    }

    /// 預設掃描範圍：0.5×預算 到 1.5×預算，步長 0.1×預算
    ///
    /// 邊界與步長皆先整數截斷；截斷後步長不為正時回傳空範圍
    /// （預算太小沒有有意義的掃描粒度）。
    pub fn default_budget_range(budget: f64) -> Vec<f64> {
        let start = (budget * 0.5).trunc() as i64;
        let stop = (budget * 1.5).trunc() as i64;
        let step = (budget * 0.1).trunc() as i64;

        if step <= 0 {
            return Vec::new();
        }

        let mut budgets = Vec::new();
        let mut b = start;
        while b < stop {
            budgets.push(b as f64);
            b += step;
        }

        budgets
    }
}

//! 最佳化結果模型

use serde::{Deserialize, Serialize};

use crate::params::OptimizationParams;

/// 人力配置解（最佳化計算結果）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// 技術工人人數
    pub skilled_workers: u32,

    /// 半技術工人人數
    pub semi_skilled_workers: u32,

    /// 總人數
    pub total_workers: u32,

    /// 總產量
    pub total_production: f64,

    /// 已用預算
    pub budget_used: f64,

    /// 剩餘預算（不可行備援解可能為負值）
    pub budget_remaining: f64,

    /// 是否滿足預算與最低產量約束
    ///
    /// 不可行備援解會如實回報超支的預算與人數上限點，
    /// 此旗標讓呼叫端不必自行比對欄位判斷可行性。
    pub feasible: bool,
}

impl Solution {
    /// 由整數人數重建解
    ///
    /// 產量與已用預算一律由取整後的人數重新計算，
    /// 不沿用連續階段的數值（取整可能改變哪些約束是緊的）。
    pub fn new(params: &OptimizationParams, skilled: u32, semi_skilled: u32) -> Self {
        let total_production = params.production_of(f64::from(skilled), f64::from(semi_skilled));
        let budget_used = params.cost_of(f64::from(skilled), f64::from(semi_skilled));
        let feasible = budget_used <= params.budget && total_production >= params.min_production;

        Self {
            skilled_workers: skilled,
            semi_skilled_workers: semi_skilled,
            total_workers: skilled + semi_skilled,
            total_production,
            budget_used,
            budget_remaining: params.budget - budget_used,
            feasible,
        }
    }
}

/// 敏感度分析點（單一測試預算下的近似解）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// 測試預算
    pub test_budget: f64,

    /// 技術工人人數
    pub skilled_workers: u32,

    /// 半技術工人人數
    pub semi_skilled_workers: u32,

    /// 總產量
    pub production: f64,
}

impl SensitivityPoint {
    /// 創建新的敏感度分析點
    pub fn new(test_budget: f64, skilled: u32, semi_skilled: u32, production: f64) -> Self {
        Self {
            test_budget,
            skilled_workers: skilled,
            semi_skilled_workers: semi_skilled,
            production,
        }
    }

    /// 無法滿足最低產量時的零解
    pub fn zero(test_budget: f64) -> Self {
        Self::new(test_budget, 0, 0, 0.0)
    }

    /// 投影為圖表資料點
    pub fn chart_datum(&self) -> ChartDatum {
        ChartDatum {
            budget: self.test_budget,
            production: self.production,
        }
    }
}

/// 預算-產量曲線的圖表資料點
///
/// 外部網頁層以 JSON 序列化後餵給前端圖表。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub budget: f64,
    pub production: f64,
}

//! 最佳化參數模型

use serde::{Deserialize, Serialize};

/// 人力配置最佳化參數
///
/// 兩類勞動力（技術工人 / 半技術工人）共用一份預算，
/// 求解器在預算上限、最低產量與人數上限約束下最大化總產量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationParams {
    /// 技術工人單位成本（每人每期）
    pub skilled_cost: f64,

    /// 半技術工人單位成本（每人每期）
    pub semi_skilled_cost: f64,

    /// 技術工人單位產量（每人）
    pub skilled_production: f64,

    /// 半技術工人單位產量（每人）
    pub semi_skilled_production: f64,

    /// 總預算上限
    pub budget: f64,

    /// 最低產量要求
    pub min_production: f64,

    /// 技術工人人數上限
    pub max_skilled_workers: u32,

    /// 半技術工人人數上限
    pub max_semi_skilled_workers: u32,
}

impl Default for OptimizationParams {
    fn default() -> Self {
        Self {
            skilled_cost: 300.0,
            semi_skilled_cost: 150.0,
            skilled_production: 10.0,
            semi_skilled_production: 4.0,
            budget: 6000.0,
            min_production: 100.0,
            max_skilled_workers: 30,
            max_semi_skilled_workers: 60,
        }
    }
}

impl OptimizationParams {
    /// 創建新的最佳化參數（其餘欄位使用預設值）
    pub fn new(
        skilled_cost: f64,
        semi_skilled_cost: f64,
        skilled_production: f64,
        semi_skilled_production: f64,
    ) -> Self {
        Self {
            skilled_cost,
            semi_skilled_cost,
            skilled_production,
            semi_skilled_production,
            ..Self::default()
        }
    }

    /// 建構器模式：設置總預算
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// 建構器模式：設置最低產量
    pub fn with_min_production(mut self, min_production: f64) -> Self {
        self.min_production = min_production;
        self
    }

    /// 建構器模式：設置技術工人人數上限
    pub fn with_max_skilled_workers(mut self, max: u32) -> Self {
        self.max_skilled_workers = max;
        self
    }

    /// 建構器模式：設置半技術工人人數上限
    pub fn with_max_semi_skilled_workers(mut self, max: u32) -> Self {
        self.max_semi_skilled_workers = max;
        self
    }

    /// 配置 (x, y) 的總成本：`skilled_cost·x + semi_skilled_cost·y`
    pub fn cost_of(&self, skilled: f64, semi_skilled: f64) -> f64 {
        self.skilled_cost * skilled + self.semi_skilled_cost * semi_skilled
    }

    /// 配置 (x, y) 的總產量：`skilled_production·x + semi_skilled_production·y`
    pub fn production_of(&self, skilled: f64, semi_skilled: f64) -> f64 {
        self.skilled_production * skilled + self.semi_skilled_production * semi_skilled
    }

    /// 技術工人效率比（單位成本產量）
    ///
    /// 成本為零時依 IEEE 754 規則得到無窮大，呼叫端以人數上限截斷。
    pub fn skilled_efficiency(&self) -> f64 {
        self.skilled_production / self.skilled_cost
    }

    /// 半技術工人效率比（單位成本產量）
    pub fn semi_skilled_efficiency(&self) -> f64 {
        self.semi_skilled_production / self.semi_skilled_cost
    }

    /// 驗證參數是否為有限且非負的數值
    ///
    /// 求解器本身容忍零值（見 calc crate），不會主動呼叫驗證；
    /// 此方法供外部呼叫端（表單層）在求解前使用。
    ///
    /// # 範例
    /// ```
    /// use workforce_core::OptimizationParams;
    ///
    /// assert!(OptimizationParams::default().validate().is_ok());
    /// assert!(OptimizationParams::default().with_budget(-1.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("skilled_cost", self.skilled_cost),
            ("semi_skilled_cost", self.semi_skilled_cost),
            ("skilled_production", self.skilled_production),
            ("semi_skilled_production", self.semi_skilled_production),
            ("budget", self.budget),
            ("min_production", self.min_production),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(crate::WorkforceError::NonFiniteParameter(name));
            }
            if value < 0.0 {
                return Err(crate::WorkforceError::NegativeParameter(name));
            }
        }

        Ok(())
    }
}

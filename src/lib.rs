//! # Workforce
//!
//! 人力配置最佳化引擎：在預算上限、最低產量與人數上限約束下，
//! 將預算分配給技術 / 半技術兩類勞動力以最大化總產量。
//!
//! - [`WorkforceOptimizer`]：二維線性規劃角點法精確求解
//! - [`SensitivityAnalyzer`]：掃描測試預算產生預算-產量曲線
//!
//! 兩個元件互相獨立，只共用同一份 [`OptimizationParams`]；
//! 每次求解都是輸入的純函數，外部系統（表單、持久化、路由）
//! 負責在呼叫前備妥參數並自行保存結果。

pub use workforce_calc::{
    OptimizationReport, OptimizationWarning, SensitivityAnalyzer, WarningSeverity,
    WorkforceOptimizer,
};
pub use workforce_core::{
    ChartDatum, OptimizationParams, Result, SensitivityPoint, Solution, WorkforceError,
};

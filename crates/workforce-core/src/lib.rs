//! # Workforce Core
//!
//! 核心資料模型與類型定義

pub mod params;
pub mod solution;

// Re-export 主要類型
pub use params::OptimizationParams;
pub use solution::{ChartDatum, SensitivityPoint, Solution};

/// 人力配置錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum WorkforceError {
    #[error("參數 {0} 必須為有限數值")]
    NonFiniteParameter(&'static str),

    #[error("參數 {0} 不可為負值")]
    NegativeParameter(&'static str),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WorkforceError>;

//! 預算敏感度分析示例
//!
//! 產生網頁層圖表使用的預算-產量曲線 JSON。

use workforce::{ChartDatum, OptimizationParams, SensitivityAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 預算敏感度分析示例 ===\n");

    let params = OptimizationParams::default();
    params.validate()?;

    // 預設掃描範圍：0.5×預算 到 1.5×預算，步長 0.1×預算
    let budgets = SensitivityAnalyzer::default_budget_range(params.budget);
    let curve = SensitivityAnalyzer::sweep_par(&params, &budgets);

    println!("預算-產量曲線:");
    for point in &curve {
        println!(
            "  預算 {:>7} → 技術 {:>2} 人，半技術 {:>2} 人，產量 {}",
            point.test_budget, point.skilled_workers, point.semi_skilled_workers, point.production
        );
    }

    // 投影為前端圖表的資料格式
    let chart: Vec<ChartDatum> = curve.iter().map(|p| p.chart_datum()).collect();
    println!("\n圖表 JSON:\n{}", serde_json::to_string_pretty(&chart)?);

    Ok(())
}

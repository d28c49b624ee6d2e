//! 簡單人力配置求解示例

use workforce::{OptimizationParams, WorkforceOptimizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單人力配置求解示例 ===\n");

    // 創建最佳化參數
    let params = OptimizationParams::new(300.0, 150.0, 10.0, 4.0)
        .with_budget(6000.0)
        .with_min_production(100.0)
        .with_max_skilled_workers(30)
        .with_max_semi_skilled_workers(60);

    // 表單層會在求解前驗證參數
    params.validate()?;

    println!("參數:");
    println!(
        "  - 成本: 技術 {} / 半技術 {}",
        params.skilled_cost, params.semi_skilled_cost
    );
    println!(
        "  - 產量: 技術 {} / 半技術 {}",
        params.skilled_production, params.semi_skilled_production
    );
    println!(
        "  - 預算 {}，最低產量 {}，人數上限 ({}, {})",
        params.budget, params.min_production, params.max_skilled_workers, params.max_semi_skilled_workers
    );

    // 求解
    let report = WorkforceOptimizer::new(params).calculate();
    let solution = &report.solution;

    println!("\n最佳配置:");
    println!("  - 技術工人: {} 人", solution.skilled_workers);
    println!("  - 半技術工人: {} 人", solution.semi_skilled_workers);
    println!("  - 總人數: {} 人", solution.total_workers);
    println!("  - 總產量: {}", solution.total_production);
    println!(
        "  - 已用預算: {}（剩餘 {}）",
        solution.budget_used, solution.budget_remaining
    );
    println!("  - 可行: {}", solution.feasible);

    for warning in &report.warnings {
        println!("  ! {}", warning.message);
    }

    Ok(())
}

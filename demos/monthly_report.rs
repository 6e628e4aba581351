//! 月度統計報表示例
//!
//! 執行：`RUST_LOG=debug cargo run --example monthly_report`

use chrono::{Datelike, Duration};
use prodstat::{
    format_quantity, Clock, Fact, MemoryStore, Plan, ReportConfig, Resource, ResourceId,
    StatisticsCalculator, SystemClock, Workshop, WorkshopId,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("=== 車間月度統計報表示例 ===\n");

    let today = SystemClock.today();

    // 建立車間與資源
    let mut store = MemoryStore::new();
    for (id, name, code) in [(1, "煉鋼車間", 101), (2, "軋鋼車間", 102)] {
        store.add_workshop(
            Workshop::new(WorkshopId(id), name.to_string())
                .with_code(code)
                .with_ord_s(code - 100),
        );
    }
    for (id, name, unit, priority) in [(1, "鋼坯", "t", 1), (2, "電力", "kWh", 2)] {
        let resource = Resource::new(ResourceId(id), name.to_string(), unit.to_string());
        store.add_resource(resource.with_priority(priority));
    }

    // 本月計劃與截至今天的實績
    for (workshop, resource, plan_value, daily_fact) in [
        (1, 1, 31_000, 1_050),
        (1, 2, 930_000, 29_500),
        (2, 1, 15_500, 480),
        (2, 2, 620_000, 21_000),
    ] {
        let (workshop, resource) = (WorkshopId(workshop), ResourceId(resource));
        store.upsert_plan(Plan::new(
            workshop,
            resource,
            today.year(),
            today.month(),
            Decimal::from(plan_value),
        ))?;

        for offset in 0..today.day0() as i64 + 1 {
            let date = today - Duration::days(offset);
            store.upsert_fact(Fact::new(workshop, resource, date, Decimal::from(daily_fact)));
        }
    }

    // 產生報表
    let calculator = StatisticsCalculator::new(&store, &store);
    let config = ReportConfig::for_today(today).with_parallel(true);
    let report = calculator.build_report(&store, &config)?;

    println!("報表期間: {}（至 {}）\n", report.period, report.as_of);
    for section in &report.sections {
        println!("[{}]", section.workshop);
        for row in &section.rows {
            println!(
                "  {:<16} 月計劃 {:>14}  至今計劃 {:>14}  月實績 {:>14}  偏差 {:>12}  年累計 {:>14} / {:>14}",
                row.resource.to_string(),
                format_quantity(row.plan_month),
                format_quantity(row.month_plan),
                format_quantity(row.month_fact),
                format_quantity(row.month_diff),
                format_quantity(row.year_fact),
                format_quantity(row.year_plan),
            );
        }
    }

    Ok(())
}

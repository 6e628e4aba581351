//! # Prodstat Calculation Engine
//!
//! 計劃與實績統計引擎：日統計、月累計、年累計

pub mod calculator;
pub mod daily;
pub mod format;
pub mod monthly;
pub mod report;
pub mod yearly;

// Re-export 主要類型
pub use calculator::StatisticsCalculator;
pub use daily::{daily_statistics, DailyStatistics};
pub use format::format_quantity;
pub use monthly::{monthly_statistics, MonthlyStatistics};
pub use report::{build_report, ReportRow, StatisticsReport, WorkshopSection};
pub use yearly::{yearly_statistics, YearlyStatistics};

use prodstat_core::DomainError;
use rust_decimal::Decimal;

/// 完成率（%）= 實績 / 計劃 × 100
///
/// 計劃不為正時定義為 0；結果超出 `Decimal` 範圍時返回 [`DomainError::Overflow`]。
pub fn completion_percent(fact: Decimal, plan: Decimal) -> Result<Decimal, DomainError> {
    if plan <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    fact.checked_div(plan)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(DomainError::Overflow("completion_percent"))
}

/// 偏差 = 實績 - 計劃
pub(crate) fn deviation(fact: Decimal, plan: Decimal) -> Result<Decimal, DomainError> {
    fact.checked_sub(plan).ok_or(DomainError::Overflow("deviation"))
}

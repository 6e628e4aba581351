//! 年統計（年累計至今）
//!
//! 年累計 = 已結束月份的整月計劃/實績 + 本月至今計劃/本月實績。
//! 已結束月份不做按日折算。

use chrono::NaiveDate;
use prodstat_core::{DomainError, FactStore, PlanStore, ResourceId, WorkshopId, YearMonth};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{completion_percent, deviation};
use crate::monthly::monthly_statistics;

/// 年統計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyStatistics {
    pub year_plan_to_date: Decimal,
    pub year_fact_to_date: Decimal,
    pub year_deviation: Decimal,
    pub year_percent: Decimal,
}

impl YearlyStatistics {
    /// 數值欄位（欄位名稱供報表直接引用）
    pub fn fields(&self) -> [(&'static str, Decimal); 4] {
        [
            ("year_plan_to_date", self.year_plan_to_date),
            ("year_fact_to_date", self.year_fact_to_date),
            ("year_deviation", self.year_deviation),
            ("year_percent", self.year_percent),
        ]
    }
}

/// 計算年累計至 `current_month`
pub fn yearly_statistics<P, F>(
    plans: &P,
    facts: &F,
    workshop_id: WorkshopId,
    resource_id: ResourceId,
    year: i32,
    current_month: u32,
    today: NaiveDate,
) -> prodstat_core::Result<YearlyStatistics>
where
    P: PlanStore + ?Sized,
    F: FactStore + ?Sized,
{
    YearMonth::new(year, current_month)?;

    let mut total_plan = Decimal::ZERO;
    let mut total_fact = Decimal::ZERO;

    // 已結束月份：整月計劃與實績
    for month in 1..current_month {
        let stats = monthly_statistics(plans, facts, workshop_id, resource_id, year, month, today)?;
        total_plan = accumulate(total_plan, stats.plan_month, "year_plan_to_date")?;
        total_fact = accumulate(total_fact, stats.fact_month, "year_fact_to_date")?;
    }

    // 本月：至今計劃與月實績
    let current =
        monthly_statistics(plans, facts, workshop_id, resource_id, year, current_month, today)?;
    total_plan = accumulate(total_plan, current.plan_to_date, "year_plan_to_date")?;
    total_fact = accumulate(total_fact, current.fact_month, "year_fact_to_date")?;

    tracing::debug!(
        workshop = %workshop_id,
        resource = %resource_id,
        year,
        current_month,
        "年統計: 計劃 {}，實績 {}",
        total_plan,
        total_fact
    );

    Ok(YearlyStatistics {
        year_plan_to_date: total_plan,
        year_fact_to_date: total_fact,
        year_deviation: deviation(total_fact, total_plan)?,
        year_percent: completion_percent(total_fact, total_plan)?,
    })
}

fn accumulate(
    total: Decimal,
    value: Decimal,
    field: &'static str,
) -> Result<Decimal, DomainError> {
    total.checked_add(value).ok_or(DomainError::Overflow(field))
}

//! 日統計

use chrono::NaiveDate;
use prodstat_core::{FactStore, PlanStore, ResourceId, WorkshopId, YearMonth};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{completion_percent, deviation};

/// 日統計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStatistics {
    /// 統計日期
    pub date: NaiveDate,
    /// 日計劃
    pub plan_daily: Decimal,
    /// 日實績
    pub fact_daily: Decimal,
    /// 偏差 = 實績 - 計劃
    pub deviation: Decimal,
    /// 完成率（%）
    pub completion_percent: Decimal,
}

impl DailyStatistics {
    /// 數值欄位（欄位名稱供報表直接引用）
    pub fn fields(&self) -> [(&'static str, Decimal); 4] {
        [
            ("plan_daily", self.plan_daily),
            ("fact_daily", self.fact_daily),
            ("deviation", self.deviation),
            ("completion_percent", self.completion_percent),
        ]
    }
}

/// 計算指定日期的日統計
///
/// 日計劃取自該日所在月份的月計劃；查無計劃或實績時以 0 計。
pub fn daily_statistics<P, F>(
    plans: &P,
    facts: &F,
    workshop_id: WorkshopId,
    resource_id: ResourceId,
    target_date: NaiveDate,
) -> prodstat_core::Result<DailyStatistics>
where
    P: PlanStore + ?Sized,
    F: FactStore + ?Sized,
{
    let period = YearMonth::of(target_date)?;

    let plan_daily = plans
        .find(workshop_id, resource_id, period.year(), period.month())?
        .map(|plan| plan.daily_plan())
        .transpose()?
        .unwrap_or(Decimal::ZERO);

    let fact_daily = facts
        .find(workshop_id, resource_id, target_date)?
        .map(|fact| fact.fact_value)
        .unwrap_or(Decimal::ZERO);

    tracing::debug!(
        workshop = %workshop_id,
        resource = %resource_id,
        date = %target_date,
        "日統計: 計劃 {}，實績 {}",
        plan_daily,
        fact_daily
    );

    Ok(DailyStatistics {
        date: target_date,
        plan_daily,
        fact_daily,
        deviation: deviation(fact_daily, plan_daily)?,
        completion_percent: completion_percent(fact_daily, plan_daily)?,
    })
}

//! 月統計（月累計至今）

use chrono::NaiveDate;
use prodstat_core::period::{self, YearMonth};
use prodstat_core::{DomainError, FactStore, PlanStore, ResourceId, WorkshopId};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{completion_percent, deviation};

/// 月統計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStatistics {
    /// 月計劃
    pub plan_month: Decimal,
    /// 日計劃
    pub plan_daily: Decimal,
    /// 至今計劃 = 日計劃 × 至今天數
    pub plan_to_date: Decimal,
    /// 月實績（整月合計）
    pub fact_month: Decimal,
    /// 月份天數
    pub days_in_month: u32,
    /// 至今天數
    pub current_day: u32,
    /// 偏差 = 月實績 - 至今計劃
    pub deviation: Decimal,
    /// 完成率（%）
    pub completion_percent: Decimal,
}

impl MonthlyStatistics {
    /// 數值欄位（欄位名稱供報表直接引用）
    pub fn fields(&self) -> [(&'static str, Decimal); 8] {
        [
            ("plan_month", self.plan_month),
            ("plan_daily", self.plan_daily),
            ("plan_to_date", self.plan_to_date),
            ("fact_month", self.fact_month),
            ("days_in_month", Decimal::from(self.days_in_month)),
            ("current_day", Decimal::from(self.current_day)),
            ("deviation", self.deviation),
            ("completion_percent", self.completion_percent),
        ]
    }
}

/// 計算指定年月的月統計
///
/// `today` 決定至今天數：當月取今天的日，其他月份視為整月。
pub fn monthly_statistics<P, F>(
    plans: &P,
    facts: &F,
    workshop_id: WorkshopId,
    resource_id: ResourceId,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> prodstat_core::Result<MonthlyStatistics>
where
    P: PlanStore + ?Sized,
    F: FactStore + ?Sized,
{
    let period = YearMonth::new(year, month)?;

    let plan_month = plans
        .find(workshop_id, resource_id, year, month)?
        .map(|plan| plan.plan_value)
        .unwrap_or(Decimal::ZERO);
    let plan_daily = period::daily_rate(plan_month, year, month)?;

    let fact_month =
        facts.sum_in_range(workshop_id, resource_id, period.first_day(), period.last_day())?;

    let current_day = period::current_day(year, month, today)?;
    let plan_to_date = plan_daily
        .checked_mul(Decimal::from(current_day))
        .ok_or(DomainError::Overflow("plan_to_date"))?;

    tracing::debug!(
        workshop = %workshop_id,
        resource = %resource_id,
        period = %period,
        "月統計: 至今計劃 {}（{}/{} 天），實績 {}",
        plan_to_date,
        current_day,
        period.days(),
        fact_month
    );

    Ok(MonthlyStatistics {
        plan_month,
        plan_daily,
        plan_to_date,
        fact_month,
        days_in_month: period.days(),
        current_day,
        deviation: deviation(fact_month, plan_to_date)?,
        completion_percent: completion_percent(fact_month, plan_to_date)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodstat_core::{Fact, Plan, StatsError};
    use prodstat_store::MemoryStore;
    use rstest::rstest;

    const W: WorkshopId = WorkshopId(1);
    const R: ResourceId = ResourceId(1);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        let tolerance = Decimal::new(1, 3);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected ≈ {}, got {}",
            expected,
            actual
        );
    }

    /// 2024-02（29 天）計劃 300，2/1 ~ 2/5 實績合計 60
    fn february_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.upsert_plan(Plan::new(W, R, 2024, 2, Decimal::from(300))).unwrap();
        for (day, value) in [(1, 10), (2, 12), (3, 14), (4, 11), (5, 13)] {
            store.upsert_fact(Fact::new(W, R, date(2024, 2, day), Decimal::from(value)));
        }
        // 月份邊界外的實績
        store.upsert_fact(Fact::new(W, R, date(2024, 1, 31), Decimal::from(500)));
        store.upsert_fact(Fact::new(W, R, date(2024, 3, 1), Decimal::from(500)));
        store
    }

    #[test]
    fn test_monthly_current_month() {
        let store = february_store();

        let stats =
            monthly_statistics(&store, &store, W, R, 2024, 2, date(2024, 2, 5)).unwrap();

        assert_eq!(stats.plan_month, Decimal::from(300));
        assert_close(stats.plan_daily, Decimal::new(103448, 4));
        assert_eq!(stats.days_in_month, 29);
        assert_eq!(stats.current_day, 5);
        assert_close(stats.plan_to_date, Decimal::new(51724, 3));
        assert_eq!(stats.fact_month, Decimal::from(60));
        assert_close(stats.deviation, Decimal::new(8276, 3));
        assert_close(stats.completion_percent, Decimal::from(116));
    }

    #[test]
    fn test_monthly_exact_daily_plan() {
        let mut store = MemoryStore::new();
        store.upsert_plan(Plan::new(W, R, 2024, 3, Decimal::from(3100))).unwrap();

        let stats =
            monthly_statistics(&store, &store, W, R, 2024, 3, date(2024, 3, 10)).unwrap();

        assert_eq!(stats.plan_daily, Decimal::from(100));
        assert_eq!(stats.plan_to_date, Decimal::from(1000));
        assert_eq!(stats.deviation, Decimal::from(-1000));
        assert_eq!(stats.completion_percent, Decimal::ZERO);
    }

    #[rstest]
    #[case::past_month(date(2024, 5, 20))]
    #[case::same_month_next_year(date(2025, 2, 5))]
    #[case::future_month(date(2023, 12, 31))]
    fn test_monthly_other_months_fully_elapsed(#[case] today: NaiveDate) {
        let store = february_store();

        let stats = monthly_statistics(&store, &store, W, R, 2024, 2, today).unwrap();

        assert_eq!(stats.current_day, 29);
        assert_close(stats.plan_to_date, Decimal::from(300));
        assert_close(stats.deviation, Decimal::from(-240));
        assert_close(stats.completion_percent, Decimal::from(20));
    }

    #[test]
    fn test_monthly_without_plan() {
        let mut store = MemoryStore::new();
        store.upsert_fact(Fact::new(W, R, date(2024, 3, 2), Decimal::from(75)));

        let stats =
            monthly_statistics(&store, &store, W, R, 2024, 3, date(2024, 3, 10)).unwrap();

        assert_eq!(stats.plan_month, Decimal::ZERO);
        assert_eq!(stats.plan_daily, Decimal::ZERO);
        assert_eq!(stats.plan_to_date, Decimal::ZERO);
        assert_eq!(stats.fact_month, Decimal::from(75));
        assert_eq!(stats.deviation, Decimal::from(75));
        assert_eq!(stats.completion_percent, Decimal::ZERO);
    }

    #[test]
    fn test_monthly_invalid_month() {
        let store = MemoryStore::new();

        let err = monthly_statistics(&store, &store, W, R, 2024, 13, date(2024, 3, 10))
            .unwrap_err();

        assert!(matches!(err, StatsError::Domain(_)));
    }

    #[test]
    fn test_monthly_is_idempotent() {
        let store = february_store();
        let today = date(2024, 2, 5);

        let first = monthly_statistics(&store, &store, W, R, 2024, 2, today).unwrap();
        let second = monthly_statistics(&store, &store, W, R, 2024, 2, today).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.fields(), second.fields());
    }

    #[test]
    fn test_monthly_fact_total_overflow() {
        // 兩筆 5e28 的實績合計超出 Decimal 範圍
        let huge = Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0);
        let mut store = MemoryStore::new();
        store.upsert_fact(Fact::new(W, R, date(2024, 3, 1), huge));
        store.upsert_fact(Fact::new(W, R, date(2024, 3, 2), huge));

        let err = monthly_statistics(&store, &store, W, R, 2024, 3, date(2024, 3, 10))
            .unwrap_err();

        assert!(err.is_storage());
    }

    #[test]
    fn test_monthly_deviation_overflow() {
        let mut store = MemoryStore::new();
        store.upsert_plan(Plan::new(W, R, 2024, 1, Decimal::MIN)).unwrap();
        store.upsert_fact(Fact::new(W, R, date(2024, 1, 15), Decimal::MAX));

        let err = monthly_statistics(&store, &store, W, R, 2024, 1, date(2024, 3, 10))
            .unwrap_err();

        assert!(matches!(err, StatsError::Domain(DomainError::Overflow(_))));
    }
}

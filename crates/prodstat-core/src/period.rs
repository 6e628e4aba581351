//! 期間計算（日曆工具）
//!
//! 純函數：月份天數、日計劃、月份與任意日期區間的交集、按天數折算計劃。

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 最小年份
pub const MIN_YEAR: i32 = 1;

/// 最大年份
pub const MAX_YEAR: i32 = 9999;

/// 已驗證的年月
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// 創建年月（驗證年份與月份範圍）
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// 取得日期所在的年月
    pub fn of(date: NaiveDate) -> Result<Self, DomainError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// 該月天數
    pub fn days(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// 該月第一天
    pub fn first_day(&self) -> NaiveDate {
        self.date(1)
    }

    /// 該月最後一天
    pub fn last_day(&self) -> NaiveDate {
        self.date(self.days())
    }

    /// 檢查日期是否落在該月
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    // year 與 month 已驗證，day 由 days() 限定，日期必然有效
    fn date(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or(NaiveDate::MIN)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// 格里曆閏年判斷
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 月份天數
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DomainError> {
    Ok(YearMonth::new(year, month)?.days())
}

/// 日計劃 = 月計劃 / 月份天數
pub fn daily_rate(plan_value: Decimal, year: i32, month: u32) -> Result<Decimal, DomainError> {
    let days = days_in_month(year, month)?;
    plan_value
        .checked_div(Decimal::from(days))
        .ok_or(DomainError::Overflow("plan_daily"))
}

/// 將日期區間裁切至指定月份
///
/// 返回 `None` 表示區間與該月沒有交集。跨月區間只取與該月重疊的部分，
/// 不會對其他月份做累加。
pub fn clamp_period_to_month(
    year: i32,
    month: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Option<(NaiveDate, NaiveDate)>, DomainError> {
    let period = YearMonth::new(year, month)?;

    let clamped_start = start_date.max(period.first_day());
    let clamped_end = end_date.min(period.last_day());

    if clamped_start > clamped_end {
        return Ok(None);
    }

    Ok(Some((clamped_start, clamped_end)))
}

/// 按天數折算月計劃 = 日計劃 × 交集天數（含首尾）
pub fn prorate(
    plan_value: Decimal,
    year: i32,
    month: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Decimal, DomainError> {
    let rate = daily_rate(plan_value, year, month)?;

    match clamp_period_to_month(year, month, start_date, end_date)? {
        Some((start, end)) => rate
            .checked_mul(Decimal::from(inclusive_days(start, end)))
            .ok_or(DomainError::Overflow("plan_for_period")),
        None => Ok(Decimal::ZERO),
    }
}

/// 兩個日期之間的天數（含首尾）
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// 「至今」天數
///
/// 若年月為當前年月，返回今天的日；否則（過去或未來的月份）視為整月已過，返回月份天數。
pub fn current_day(year: i32, month: u32, today: NaiveDate) -> Result<u32, DomainError> {
    let period = YearMonth::new(year, month)?;

    if period.contains(today) {
        Ok(today.day())
    } else {
        Ok(period.days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2024, 1, 31)]
    #[case(2024, 4, 30)]
    #[case(2024, 9, 30)]
    #[case(2024, 12, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month).unwrap(), expected);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1, 1600, 1999, 2024, 2100, 9999] {
            for month in 1..=12 {
                let first = date(year, month, 1);
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)
                };
                // 9999-12 之後的日期仍在 chrono 範圍內
                let expected = (next.unwrap() - first).num_days() as u32;
                assert_eq!(days_in_month(year, month).unwrap(), expected);
            }
        }
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn test_invalid_month(#[case] month: u32) {
        assert_eq!(
            days_in_month(2024, month),
            Err(DomainError::InvalidMonth(month))
        );
        assert!(daily_rate(Decimal::from(100), 2024, month).is_err());
    }

    #[test]
    fn test_invalid_year() {
        assert_eq!(YearMonth::new(0, 1), Err(DomainError::InvalidYear(0)));
        assert_eq!(YearMonth::new(10000, 1), Err(DomainError::InvalidYear(10000)));
    }

    #[test]
    fn test_daily_rate() {
        assert_eq!(
            daily_rate(Decimal::from(3100), 2024, 1).unwrap(),
            Decimal::from(100)
        );
        assert_eq!(daily_rate(Decimal::ZERO, 2024, 2).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_clamp_period_to_month() {
        // 跨越月初
        let clamped = clamp_period_to_month(2024, 3, date(2024, 2, 20), date(2024, 3, 10)).unwrap();
        assert_eq!(clamped, Some((date(2024, 3, 1), date(2024, 3, 10))));

        // 跨越月底
        let clamped = clamp_period_to_month(2024, 3, date(2024, 3, 25), date(2024, 4, 5)).unwrap();
        assert_eq!(clamped, Some((date(2024, 3, 25), date(2024, 3, 31))));

        // 無交集
        let clamped = clamp_period_to_month(2024, 3, date(2024, 4, 1), date(2024, 4, 30)).unwrap();
        assert_eq!(clamped, None);

        // 反向區間
        let clamped = clamp_period_to_month(2024, 3, date(2024, 3, 10), date(2024, 3, 5)).unwrap();
        assert_eq!(clamped, None);
    }

    #[test]
    fn test_prorate() {
        let plan_value = Decimal::from(3100);

        // 3100 / 31 = 100 每天，3/1 ~ 3/10 共 10 天
        let value = prorate(plan_value, 2024, 3, date(2024, 2, 1), date(2024, 3, 10)).unwrap();
        assert_eq!(value, Decimal::from(1000));

        // 整月
        let value = prorate(plan_value, 2024, 3, date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(value, Decimal::from(3100));

        // 無交集
        let value = prorate(plan_value, 2024, 3, date(2024, 5, 1), date(2024, 5, 2)).unwrap();
        assert_eq!(value, Decimal::ZERO);
    }

    #[test]
    fn test_extreme_plan_values() {
        // 上限附近的計劃值不會 panic：要嘛得到數值，要嘛回報溢位
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 31);

        for plan_value in [Decimal::MAX, Decimal::MIN] {
            let rate = daily_rate(plan_value, 2024, 1).unwrap();
            assert_eq!(rate.is_sign_negative(), plan_value.is_sign_negative());

            match prorate(plan_value, 2024, 1, start, end) {
                Ok(value) => assert_eq!(value.is_sign_negative(), plan_value.is_sign_negative()),
                Err(err) => assert_eq!(err, DomainError::Overflow("plan_for_period")),
            }
        }
    }

    #[test]
    fn test_current_day() {
        let today = date(2024, 2, 5);

        assert_eq!(current_day(2024, 2, today).unwrap(), 5);
        // 過去月份
        assert_eq!(current_day(2024, 1, today).unwrap(), 31);
        // 未來月份不做截斷
        assert_eq!(current_day(2024, 4, today).unwrap(), 30);
        // 同月份不同年份
        assert_eq!(current_day(2023, 2, today).unwrap(), 28);
    }

    #[test]
    fn test_year_month_bounds() {
        let period = YearMonth::new(2024, 2).unwrap();
        assert_eq!(period.first_day(), date(2024, 2, 1));
        assert_eq!(period.last_day(), date(2024, 2, 29));
        assert!(period.contains(date(2024, 2, 29)));
        assert!(!period.contains(date(2024, 3, 1)));
        assert_eq!(period.to_string(), "2024-02");
    }

    proptest! {
        #[test]
        fn prop_daily_rate_round_trip(
            plan in 0i64..1_000_000_000,
            cents in 0u32..100,
            year in MIN_YEAR..=MAX_YEAR,
            month in 1u32..=12
        ) {
            let plan_value = Decimal::from(plan) + Decimal::new(cents as i64, 2);
            let days = Decimal::from(days_in_month(year, month).unwrap());
            let restored = daily_rate(plan_value, year, month).unwrap() * days;

            prop_assert!((restored - plan_value).abs() < Decimal::new(1, 12));
        }
    }
}

//! 月計劃模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::{self, YearMonth};
use crate::{DomainError, ResourceId, WorkshopId};

/// 月計劃（車間 × 資源 × 年月，唯一）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// 車間ID
    pub workshop_id: WorkshopId,

    /// 資源ID
    pub resource_id: ResourceId,

    /// 年份
    pub year: i32,

    /// 月份（1-12）
    pub month: u32,

    /// 月計劃量
    pub plan_value: Decimal,
}

impl Plan {
    /// 創建新的月計劃
    pub fn new(
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
        plan_value: Decimal,
    ) -> Self {
        Self {
            workshop_id,
            resource_id,
            year,
            month,
            plan_value,
        }
    }

    /// 計劃所屬年月
    pub fn period(&self) -> Result<YearMonth, DomainError> {
        YearMonth::new(self.year, self.month)
    }

    /// 日計劃
    pub fn daily_plan(&self) -> Result<Decimal, DomainError> {
        period::daily_rate(self.plan_value, self.year, self.month)
    }

    /// 指定日期區間內的計劃量
    ///
    /// 只計算與本月重疊的天數。
    pub fn plan_for_period(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, DomainError> {
        period::prorate(self.plan_value, self.year, self.month, start_date, end_date)
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({}-{:02}): {}",
            self.workshop_id, self.resource_id, self.year, self.month, self.plan_value
        )
    }
}

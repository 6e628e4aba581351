//! 外部協作介面（計劃、實績、維度儲存層與時鐘）
//!
//! 統計引擎只讀取這些介面，不做任何寫入。查無資料以 `Ok(None)` 表示，
//! 只有儲存層本身失敗才返回 [`StorageError`]。

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::{Fact, Plan, Resource, ResourceId, StorageError, Workshop, WorkshopId};

/// 月計劃儲存層
pub trait PlanStore {
    /// 查詢指定車間、資源、年月的計劃
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
    ) -> Result<Option<Plan>, StorageError>;
}

/// 日實績儲存層
pub trait FactStore {
    /// 查詢指定車間、資源、日期的實績
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        date: NaiveDate,
    ) -> Result<Option<Fact>, StorageError>;

    /// 日期區間（含首尾）內的實績合計，無資料時為 0
    fn sum_in_range(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, StorageError>;
}

/// 維度儲存層（車間、資源清單）
pub trait CatalogStore {
    fn workshops(&self) -> Result<Vec<Workshop>, StorageError>;

    fn resources(&self) -> Result<Vec<Resource>, StorageError>;
}

/// 時鐘
pub trait Clock {
    /// 當前日期
    fn today(&self) -> NaiveDate;
}

/// 系統時鐘（本地時區）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定時鐘
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<T: PlanStore + ?Sized> PlanStore for &T {
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
    ) -> Result<Option<Plan>, StorageError> {
        (**self).find(workshop_id, resource_id, year, month)
    }
}

impl<T: PlanStore + ?Sized> PlanStore for Arc<T> {
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
    ) -> Result<Option<Plan>, StorageError> {
        (**self).find(workshop_id, resource_id, year, month)
    }
}

impl<T: FactStore + ?Sized> FactStore for &T {
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        date: NaiveDate,
    ) -> Result<Option<Fact>, StorageError> {
        (**self).find(workshop_id, resource_id, date)
    }

    fn sum_in_range(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, StorageError> {
        (**self).sum_in_range(workshop_id, resource_id, start_date, end_date)
    }
}

impl<T: FactStore + ?Sized> FactStore for Arc<T> {
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        date: NaiveDate,
    ) -> Result<Option<Fact>, StorageError> {
        (**self).find(workshop_id, resource_id, date)
    }

    fn sum_in_range(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, StorageError> {
        (**self).sum_in_range(workshop_id, resource_id, start_date, end_date)
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn workshops(&self) -> Result<Vec<Workshop>, StorageError> {
        (**self).workshops()
    }

    fn resources(&self) -> Result<Vec<Resource>, StorageError> {
        (**self).resources()
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    fn workshops(&self) -> Result<Vec<Workshop>, StorageError> {
        (**self).workshops()
    }

    fn resources(&self) -> Result<Vec<Resource>, StorageError> {
        (**self).resources()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let clock = FixedClock::new(today);

        assert_eq!(clock.today(), today);
        assert_eq!((&clock).today(), today);
    }

    #[test]
    fn test_shared_clock() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let shared: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::new(today));
        let cloned = Arc::clone(&shared);

        assert_eq!(shared.today(), today);
        assert_eq!(cloned.today(), today);
    }
}

//! 統計計算器
//!
//! 綁定計劃、實績儲存層與時鐘。每次查詢只讀取一次時鐘，
//! 同一次查詢內的月統計與年統計使用同一個「今天」。

use chrono::NaiveDate;
use prodstat_core::{
    CatalogStore, Clock, FactStore, PlanStore, ReportConfig, ResourceId, SystemClock, WorkshopId,
};

use crate::{DailyStatistics, MonthlyStatistics, StatisticsReport, YearlyStatistics};

/// 統計計算器
pub struct StatisticsCalculator<P, F, C = SystemClock> {
    /// 計劃儲存層
    plans: P,

    /// 實績儲存層
    facts: F,

    /// 時鐘
    clock: C,
}

impl<P, F> StatisticsCalculator<P, F, SystemClock>
where
    P: PlanStore,
    F: FactStore,
{
    /// 創建新的統計計算器（使用系統時鐘）
    pub fn new(plans: P, facts: F) -> Self {
        Self {
            plans,
            facts,
            clock: SystemClock,
        }
    }
}

impl<P, F, C> StatisticsCalculator<P, F, C>
where
    P: PlanStore,
    F: FactStore,
    C: Clock,
{
    /// 建構器模式：替換時鐘
    pub fn with_clock<C2: Clock>(self, clock: C2) -> StatisticsCalculator<P, F, C2> {
        StatisticsCalculator {
            plans: self.plans,
            facts: self.facts,
            clock,
        }
    }

    /// 當前日期
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// 日統計
    pub fn get_daily_statistics(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        target_date: NaiveDate,
    ) -> prodstat_core::Result<DailyStatistics> {
        crate::daily::daily_statistics(
            &self.plans,
            &self.facts,
            workshop_id,
            resource_id,
            target_date,
        )
    }

    /// 月統計（以時鐘的今天計算至今天數）
    pub fn get_monthly_statistics(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
    ) -> prodstat_core::Result<MonthlyStatistics> {
        let today = self.clock.today();
        self.monthly_statistics_as_of(workshop_id, resource_id, year, month, today)
    }

    /// 月統計（指定今天）
    pub fn monthly_statistics_as_of(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> prodstat_core::Result<MonthlyStatistics> {
        crate::monthly::monthly_statistics(
            &self.plans,
            &self.facts,
            workshop_id,
            resource_id,
            year,
            month,
            today,
        )
    }

    /// 年統計（以時鐘的今天計算本月至今）
    pub fn get_yearly_statistics(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        current_month: u32,
    ) -> prodstat_core::Result<YearlyStatistics> {
        let today = self.clock.today();
        self.yearly_statistics_as_of(workshop_id, resource_id, year, current_month, today)
    }

    /// 年統計（指定今天）
    pub fn yearly_statistics_as_of(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        current_month: u32,
        today: NaiveDate,
    ) -> prodstat_core::Result<YearlyStatistics> {
        crate::yearly::yearly_statistics(
            &self.plans,
            &self.facts,
            workshop_id,
            resource_id,
            year,
            current_month,
            today,
        )
    }

    /// 產生車間 × 資源統計報表
    pub fn build_report<D>(
        &self,
        catalog: &D,
        config: &ReportConfig,
    ) -> prodstat_core::Result<StatisticsReport>
    where
        D: CatalogStore + ?Sized,
        P: Sync,
        F: Sync,
    {
        let today = self.clock.today();
        crate::report::build_report(&self.plans, &self.facts, catalog, config, today)
    }

    /// 獲取計劃儲存層引用
    pub fn plans(&self) -> &P {
        &self.plans
    }

    /// 獲取實績儲存層引用
    pub fn facts(&self) -> &F {
        &self.facts
    }
}

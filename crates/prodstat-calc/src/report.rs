//! 統計報表組裝
//!
//! 依車間排序鍵（ord_s）與資源排序鍵（priority）逐列計算月、日、年統計，
//! 供網頁表格與試算表匯出使用。

use chrono::NaiveDate;
use prodstat_core::{
    CatalogStore, FactStore, PlanStore, ReportConfig, Resource, Workshop, YearMonth,
};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    daily::daily_statistics, monthly::monthly_statistics, yearly::yearly_statistics,
    DailyStatistics, MonthlyStatistics, YearlyStatistics,
};

/// 報表列（單一資源）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub resource: Resource,

    /// 月計劃
    pub plan_month: Decimal,
    /// 月至今計劃
    pub month_plan: Decimal,
    pub month_fact: Decimal,
    pub month_diff: Decimal,
    pub month_percent: Decimal,

    pub day_plan: Decimal,
    pub day_fact: Decimal,
    pub day_diff: Decimal,

    /// 年累計計劃
    pub year_plan: Decimal,
    pub year_fact: Decimal,
    pub year_diff: Decimal,
    pub year_percent: Decimal,
}

impl ReportRow {
    /// 由三個層級的統計組成報表列
    pub fn from_statistics(
        resource: Resource,
        month: &MonthlyStatistics,
        day: &DailyStatistics,
        year: &YearlyStatistics,
    ) -> Self {
        Self {
            resource,
            plan_month: month.plan_month,
            month_plan: month.plan_to_date,
            month_fact: month.fact_month,
            month_diff: month.deviation,
            month_percent: month.completion_percent,
            day_plan: day.plan_daily,
            day_fact: day.fact_daily,
            day_diff: day.deviation,
            year_plan: year.year_plan_to_date,
            year_fact: year.year_fact_to_date,
            year_diff: year.year_deviation,
            year_percent: year.year_percent,
        }
    }
}

/// 車間區段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkshopSection {
    pub workshop: Workshop,
    pub rows: Vec<ReportRow>,
}

/// 統計報表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// 報表期間
    pub period: YearMonth,

    /// 日統計日期
    pub day: NaiveDate,

    /// 計算時的今天
    pub as_of: NaiveDate,

    pub sections: Vec<WorkshopSection>,
}

impl StatisticsReport {
    /// 報表總列數
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|section| section.rows.len()).sum()
    }

    /// 查找車間區段
    pub fn section(&self, workshop_id: prodstat_core::WorkshopId) -> Option<&WorkshopSection> {
        self.sections
            .iter()
            .find(|section| section.workshop.id == workshop_id)
    }
}

/// 單次報表計算共用的期間資訊
#[derive(Debug, Clone, Copy)]
struct RowContext {
    period: YearMonth,
    day: NaiveDate,
    today: NaiveDate,
}

/// 產生統計報表
///
/// `today` 只在此處傳入一次，整份報表的所有列共用。任一列失敗則整份報表失敗。
pub fn build_report<P, F, D>(
    plans: &P,
    facts: &F,
    catalog: &D,
    config: &ReportConfig,
    today: NaiveDate,
) -> prodstat_core::Result<StatisticsReport>
where
    P: PlanStore + Sync + ?Sized,
    F: FactStore + Sync + ?Sized,
    D: CatalogStore + ?Sized,
{
    let period = config.validate()?;
    let context = RowContext {
        period,
        day: config.day_or(today),
        today,
    };

    let mut workshops = catalog.workshops()?;
    let mut resources = catalog.resources()?;
    sort_workshops(&mut workshops);
    sort_resources(&mut resources);

    tracing::info!(
        "開始產生統計報表 {}：車間 {} 個，資源 {} 個，並行 {}",
        period,
        workshops.len(),
        resources.len(),
        config.parallel
    );
    let start_time = std::time::Instant::now();

    let sections = if config.parallel {
        workshops
            .into_par_iter()
            .map(|workshop| build_section(plans, facts, workshop, &resources, context, true))
            .collect::<prodstat_core::Result<Vec<_>>>()?
    } else {
        workshops
            .into_iter()
            .map(|workshop| build_section(plans, facts, workshop, &resources, context, false))
            .collect::<prodstat_core::Result<Vec<_>>>()?
    };

    let report = StatisticsReport {
        period,
        day: context.day,
        as_of: today,
        sections,
    };

    tracing::info!(
        "統計報表完成，共 {} 列，耗時 {:?}",
        report.row_count(),
        start_time.elapsed()
    );

    Ok(report)
}

fn build_section<P, F>(
    plans: &P,
    facts: &F,
    workshop: Workshop,
    resources: &[Resource],
    context: RowContext,
    parallel: bool,
) -> prodstat_core::Result<WorkshopSection>
where
    P: PlanStore + Sync + ?Sized,
    F: FactStore + Sync + ?Sized,
{
    let rows = if parallel {
        resources
            .par_iter()
            .map(|resource| build_row(plans, facts, &workshop, resource, context))
            .collect::<prodstat_core::Result<Vec<_>>>()?
    } else {
        resources
            .iter()
            .map(|resource| build_row(plans, facts, &workshop, resource, context))
            .collect::<prodstat_core::Result<Vec<_>>>()?
    };

    Ok(WorkshopSection { workshop, rows })
}

fn build_row<P, F>(
    plans: &P,
    facts: &F,
    workshop: &Workshop,
    resource: &Resource,
    context: RowContext,
) -> prodstat_core::Result<ReportRow>
where
    P: PlanStore + ?Sized,
    F: FactStore + ?Sized,
{
    let (year, month) = (context.period.year(), context.period.month());

    let month_stats =
        monthly_statistics(plans, facts, workshop.id, resource.id, year, month, context.today)?;
    let day_stats = daily_statistics(plans, facts, workshop.id, resource.id, context.day)?;
    let year_stats =
        yearly_statistics(plans, facts, workshop.id, resource.id, year, month, context.today)?;

    Ok(ReportRow::from_statistics(
        resource.clone(),
        &month_stats,
        &day_stats,
        &year_stats,
    ))
}

/// 車間排序：ord_s 升序，未設置者排最後，同值依ID
pub fn sort_workshops(workshops: &mut [Workshop]) {
    workshops.sort_by_key(|workshop| (workshop.ord_s.is_none(), workshop.ord_s, workshop.id));
}

/// 資源排序：priority 升序，同值依ID
pub fn sort_resources(resources: &mut [Resource]) {
    resources.sort_by_key(|resource| (resource.priority, resource.id));
}

//! # Prodstat
//!
//! 車間生產計劃與實績統計：日統計、月累計、年累計

pub use prodstat_calc::{
    build_report, format_quantity, DailyStatistics, MonthlyStatistics, ReportRow,
    StatisticsCalculator, StatisticsReport, WorkshopSection, YearlyStatistics,
};
pub use prodstat_core::{
    CatalogStore, Clock, DomainError, Fact, FactStore, FixedClock, Plan, PlanStore, ReportConfig,
    Resource, ResourceId, StatsError, StorageError, SystemClock, Workshop, WorkshopId, YearMonth,
};
pub use prodstat_store::{MemoryStore, Snapshot, SnapshotError};

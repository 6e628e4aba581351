//! # Prodstat Core
//!
//! 核心資料模型、期間計算與外部協作介面

pub mod config;
pub mod dimension;
pub mod fact;
pub mod period;
pub mod plan;
pub mod store;

// Re-export 主要類型
pub use config::ReportConfig;
pub use dimension::{Resource, ResourceId, Workshop, WorkshopId};
pub use fact::Fact;
pub use period::YearMonth;
pub use plan::Plan;
pub use store::{CatalogStore, Clock, FactStore, FixedClock, PlanStore, SystemClock};

/// 領域錯誤（呼叫端傳入無效的期間）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("無效的月份: {0}（必須介於 1 到 12）")]
    InvalidMonth(u32),

    #[error("無效的年份: {0}（必須介於 {min} 到 {max}）", min = period::MIN_YEAR, max = period::MAX_YEAR)]
    InvalidYear(i32),

    #[error("數值溢位: {0}")]
    Overflow(&'static str),
}

/// 儲存層錯誤（查詢失敗或儲存層不可用）
#[derive(Debug, thiserror::Error)]
#[error("儲存層錯誤 [{store}]: {message}")]
pub struct StorageError {
    /// 發生錯誤的儲存層名稱
    pub store: &'static str,

    /// 錯誤描述
    pub message: String,

    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// 創建新的儲存層錯誤
    pub fn new(store: &'static str, message: impl Into<String>) -> Self {
        Self {
            store,
            message: message.into(),
            source: None,
        }
    }

    /// 建構器模式：附加底層錯誤
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// 統計錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StatsError {
    /// 是否為領域錯誤
    pub fn is_domain(&self) -> bool {
        matches!(self, StatsError::Domain(_))
    }

    /// 是否為儲存層錯誤
    pub fn is_storage(&self) -> bool {
        matches!(self, StatsError::Storage(_))
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

//! 報表配置模型

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{DomainError, YearMonth};

/// 統計報表配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 報表年份
    pub year: i32,

    /// 報表月份（月統計與年累計皆以此月份為準）
    pub month: u32,

    /// 日統計日期（未設置時使用報表當天）
    #[serde(default)]
    pub day: Option<NaiveDate>,

    /// 是否並行計算各車間 × 資源
    #[serde(default)]
    pub parallel: bool,
}

impl ReportConfig {
    /// 創建新的報表配置
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            day: None,
            parallel: false,
        }
    }

    /// 以今天所在的年月創建配置
    pub fn for_today(today: NaiveDate) -> Self {
        Self::new(today.year(), today.month())
    }

    /// 建構器模式：設置日統計日期
    pub fn with_day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    /// 建構器模式：設置是否並行計算
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 驗證報表期間
    pub fn validate(&self) -> Result<YearMonth, DomainError> {
        YearMonth::new(self.year, self.month)
    }

    /// 日統計日期
    pub fn day_or(&self, today: NaiveDate) -> NaiveDate {
        self.day.unwrap_or(today)
    }
}

//! 日實績模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ResourceId, WorkshopId};

/// 日實績（車間 × 資源 × 日期，唯一）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub workshop_id: WorkshopId,
    pub resource_id: ResourceId,
    pub date: NaiveDate,

    /// 當日實際量
    pub fact_value: Decimal,
}

impl Fact {
    pub fn new(
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        date: NaiveDate,
        fact_value: Decimal,
    ) -> Self {
        Self {
            workshop_id,
            resource_id,
            date,
            fact_value,
        }
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({}): {}",
            self.workshop_id, self.resource_id, self.date, self.fact_value
        )
    }
}

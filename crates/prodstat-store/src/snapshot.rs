//! 資料快照（JSON 匯入 / 匯出）

use prodstat_core::{DomainError, Fact, Plan, Resource, Workshop};
use serde::{Deserialize, Serialize};

use crate::MemoryStore;

/// 快照錯誤
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("快照格式錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("無效的計劃期間: {0}")]
    InvalidPlan(#[from] DomainError),

    #[error("重複的月計劃: {0}")]
    DuplicatePlan(String),

    #[error("重複的日實績: {0}")]
    DuplicateFact(String),
}

/// 儲存層資料快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub workshops: Vec<Workshop>,

    #[serde(default)]
    pub resources: Vec<Resource>,

    #[serde(default)]
    pub plans: Vec<Plan>,

    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl Snapshot {
    /// 從 JSON 解析快照
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 輸出為 JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 載入為記憶體儲存層
    ///
    /// 同一鍵出現多筆計劃或實績時拒絕載入。
    pub fn into_store(self) -> Result<MemoryStore, SnapshotError> {
        let mut store = MemoryStore::new();

        for workshop in self.workshops {
            store.add_workshop(workshop);
        }
        for resource in self.resources {
            store.add_resource(resource);
        }
        for plan in self.plans {
            let label = plan.to_string();
            if store.upsert_plan(plan)?.is_some() {
                return Err(SnapshotError::DuplicatePlan(label));
            }
        }
        for fact in self.facts {
            let label = fact.to_string();
            if store.upsert_fact(fact).is_some() {
                return Err(SnapshotError::DuplicateFact(label));
            }
        }

        Ok(store)
    }
}

impl MemoryStore {
    /// 從 JSON 快照建立儲存層
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Snapshot::from_json(json)?.into_store()
    }

    /// 匯出目前資料為快照
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            workshops: self.iter_workshops().cloned().collect(),
            resources: self.iter_resources().cloned().collect(),
            plans: self.iter_plans().cloned().collect(),
            facts: self.iter_facts().cloned().collect(),
        }
    }
}

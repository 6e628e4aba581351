//! 記憶體儲存層
//!
//! 以有序映射保存維度、計劃與實績，實作所有統計引擎需要的讀取介面。
//! 計劃鍵（車間, 資源, 年, 月）與實績鍵（車間, 資源, 日期）各自唯一，寫入即覆蓋。

use std::collections::BTreeMap;

use chrono::NaiveDate;
use prodstat_core::{
    CatalogStore, DomainError, Fact, FactStore, Plan, PlanStore, Resource, ResourceId,
    StorageError, Workshop, WorkshopId,
};
use rust_decimal::Decimal;

type PlanKey = (WorkshopId, ResourceId, i32, u32);
type FactKey = (WorkshopId, ResourceId, NaiveDate);

/// 記憶體儲存層
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    workshops: BTreeMap<WorkshopId, Workshop>,
    resources: BTreeMap<ResourceId, Resource>,
    plans: BTreeMap<PlanKey, Plan>,
    facts: BTreeMap<FactKey, Fact>,
}

impl MemoryStore {
    /// 創建空的儲存層
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或替換車間，返回被替換的舊值
    pub fn add_workshop(&mut self, workshop: Workshop) -> Option<Workshop> {
        self.workshops.insert(workshop.id, workshop)
    }

    /// 新增或替換資源，返回被替換的舊值
    pub fn add_resource(&mut self, resource: Resource) -> Option<Resource> {
        self.resources.insert(resource.id, resource)
    }

    /// 寫入月計劃（同鍵覆蓋）
    ///
    /// 期間無效的計劃不會被寫入。
    pub fn upsert_plan(&mut self, plan: Plan) -> Result<Option<Plan>, DomainError> {
        plan.period()?;
        let key = (plan.workshop_id, plan.resource_id, plan.year, plan.month);
        Ok(self.plans.insert(key, plan))
    }

    /// 寫入日實績（同鍵覆蓋）
    pub fn upsert_fact(&mut self, fact: Fact) -> Option<Fact> {
        let key = (fact.workshop_id, fact.resource_id, fact.date);
        self.facts.insert(key, fact)
    }

    /// 刪除月計劃
    pub fn remove_plan(
        &mut self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
    ) -> Option<Plan> {
        self.plans.remove(&(workshop_id, resource_id, year, month))
    }

    /// 刪除日實績
    pub fn remove_fact(
        &mut self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        date: NaiveDate,
    ) -> Option<Fact> {
        self.facts.remove(&(workshop_id, resource_id, date))
    }

    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// 所有車間（依ID排序）
    pub fn iter_workshops(&self) -> impl Iterator<Item = &Workshop> {
        self.workshops.values()
    }

    /// 所有資源（依ID排序）
    pub fn iter_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// 所有月計劃（依鍵排序）
    pub fn iter_plans(&self) -> impl Iterator<Item = &Plan> {
        self.plans.values()
    }

    /// 所有日實績（依鍵排序）
    pub fn iter_facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.values()
    }
}

impl PlanStore for MemoryStore {
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        year: i32,
        month: u32,
    ) -> Result<Option<Plan>, StorageError> {
        Ok(self
            .plans
            .get(&(workshop_id, resource_id, year, month))
            .cloned())
    }
}

impl FactStore for MemoryStore {
    fn find(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        date: NaiveDate,
    ) -> Result<Option<Fact>, StorageError> {
        Ok(self.facts.get(&(workshop_id, resource_id, date)).cloned())
    }

    fn sum_in_range(
        &self,
        workshop_id: WorkshopId,
        resource_id: ResourceId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Decimal, StorageError> {
        if start_date > end_date {
            return Ok(Decimal::ZERO);
        }

        self.facts
            .range((workshop_id, resource_id, start_date)..=(workshop_id, resource_id, end_date))
            .try_fold(Decimal::ZERO, |total, (_, fact)| total.checked_add(fact.fact_value))
            .ok_or_else(|| {
                StorageError::new("facts", format!("實績合計溢位 ({start_date} ~ {end_date})"))
            })
    }
}

impl CatalogStore for MemoryStore {
    fn workshops(&self) -> Result<Vec<Workshop>, StorageError> {
        Ok(self.workshops.values().cloned().collect())
    }

    fn resources(&self) -> Result<Vec<Resource>, StorageError> {
        Ok(self.resources.values().cloned().collect())
    }
}

//! 維度模型（車間、資源）

use serde::{Deserialize, Deserializer, Serialize};

/// 車間ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkshopId(pub i64);

/// 資源ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i64);

impl std::fmt::Display for WorkshopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W{}", self.0)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// 車間
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    /// 車間ID
    pub id: WorkshopId,

    /// 名稱
    pub name: String,

    /// 哈薩克語名稱
    #[serde(default)]
    pub name_kz: Option<String>,

    /// 車間代碼
    #[serde(default)]
    pub code: Option<i32>,

    /// 報表排序鍵
    #[serde(default)]
    pub ord_s: Option<i32>,
}

impl Workshop {
    /// 創建新的車間
    pub fn new(id: WorkshopId, name: String) -> Self {
        Self {
            id,
            name,
            name_kz: None,
            code: None,
            ord_s: None,
        }
    }

    /// 建構器模式：設置哈薩克語名稱
    pub fn with_name_kz(mut self, name_kz: String) -> Self {
        self.name_kz = Some(name_kz);
        self
    }

    /// 建構器模式：設置車間代碼
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// 建構器模式：設置排序鍵
    pub fn with_ord_s(mut self, ord_s: i32) -> Self {
        self.ord_s = Some(ord_s);
        self
    }
}

impl std::fmt::Display for Workshop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// 資源（產品、能源、原料等）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// 資源ID
    pub id: ResourceId,

    /// 名稱
    #[serde(default)]
    pub name: Option<String>,

    /// 哈薩克語名稱
    #[serde(default)]
    pub name_kz: Option<String>,

    /// 計量單位
    pub unit: String,

    /// 報表排序鍵（缺省或 null 視為 0）
    #[serde(default, deserialize_with = "null_as_zero")]
    pub priority: i32,
}

impl Resource {
    /// 創建新的資源
    pub fn new(id: ResourceId, name: String, unit: String) -> Self {
        Self {
            id,
            name: Some(name),
            name_kz: None,
            unit,
            priority: 0,
        }
    }

    /// 建構器模式：設置哈薩克語名稱
    pub fn with_name_kz(mut self, name_kz: String) -> Self {
        self.name_kz = Some(name_kz);
        self
    }

    /// 建構器模式：設置排序鍵
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name.as_deref().unwrap_or(""), self.unit)
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}

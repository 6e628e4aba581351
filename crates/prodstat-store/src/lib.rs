//! # Prodstat Store
//!
//! 記憶體儲存層與資料快照載入

pub mod memory;
pub mod snapshot;

// Re-export 主要類型
pub use memory::MemoryStore;
pub use snapshot::{Snapshot, SnapshotError};

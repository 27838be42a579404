use dashmap::DashMap;
use std::sync::Arc;

use super::types::UserRecord;

// 内存用户存储（用户 ID -> 用户记录）
//
// Cloning the handle shares the underlying map; every operation is a single
// atomic map access, so readers never observe a half-written record.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<DashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the record under its id.
    pub fn put(&self, record: UserRecord) {
        debug_assert!(!record.id.is_empty());
        self.users.insert(record.id.clone(), record);
    }

    /// Returns the record if present; absence is not an error at this layer.
    pub fn get(&self, id: &str) -> Option<UserRecord> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    /// Returns a snapshot of all current records. Order is unspecified.
    pub fn list(&self) -> Vec<UserRecord> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Removes the record if present and reports whether removal occurred.
    pub fn delete(&self, id: &str) -> bool {
        self.users.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

use uuid::Uuid;

use super::error::UserServiceError;
use super::store::UserStore;
use super::types::UserRecord;

// 定义的服务实现
//
// The service itself is stateless between calls; all durable state lives in
// the store. Ids are UUID v4, so collisions are negligible and no retry loop
// is needed.
#[derive(Debug, Default)]
pub struct MyUserService {
    pub store: UserStore,
}

impl MyUserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: UserStore) -> Self {
        Self { store }
    }

    // 创建用户并分配新的 ID
    pub fn register_user(&self, name: String, email: String) -> UserRecord {
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            name,
            email,
        };
        self.store.put(record.clone());
        tracing::info!(user_id = %record.id, "Created user");
        record
    }

    pub fn find_user(&self, id: &str) -> Result<UserRecord, UserServiceError> {
        self.store
            .get(id)
            .ok_or_else(|| UserServiceError::NotFound(id.to_string()))
    }

    pub fn all_users(&self) -> Vec<UserRecord> {
        self.store.list()
    }

    // 删除用户；不存在时返回 NotFound
    pub fn remove_user(&self, id: &str) -> Result<(), UserServiceError> {
        if self.store.delete(id) {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(())
        } else {
            Err(UserServiceError::NotFound(id.to_string()))
        }
    }
}

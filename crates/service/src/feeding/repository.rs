use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::feeding;

use super::CommitOutcome;
use crate::errors::ServiceError;

/// Persistence context the feeding service works against.
#[async_trait]
pub trait FeedingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<feeding::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<feeding::Model>, ServiceError>;
    async fn insert(&self, input: feeding::Model) -> Result<feeding::Model, ServiceError>;
    async fn replace(&self, input: feeding::Model) -> Result<CommitOutcome, ServiceError>;
    async fn remove(&self, id: i32) -> Result<bool, ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmFeedingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl FeedingRepository for SeaOrmFeedingRepository {
    async fn list(&self) -> Result<Vec<feeding::Model>, ServiceError> {
        crate::db::feeding_store::list_feedings(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<feeding::Model>, ServiceError> {
        crate::db::feeding_store::get_feeding(&self.db, id).await
    }

    async fn insert(&self, input: feeding::Model) -> Result<feeding::Model, ServiceError> {
        crate::db::feeding_store::insert_feeding(&self.db, input).await
    }

    async fn replace(&self, input: feeding::Model) -> Result<CommitOutcome, ServiceError> {
        crate::db::feeding_store::replace_feeding(&self.db, input).await
    }

    async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::feeding_store::remove_feeding(&self.db, id).await
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::feeding_store::feeding_exists(&self.db, id).await
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockFeedingRepository {
        rows: Mutex<BTreeMap<i32, feeding::Model>>,
        last_id: Mutex<i32>,
        delete_before_replace: AtomicBool,
        conflict_on_replace: AtomicBool,
    }

    impl MockFeedingRepository {
        /// The next replace behaves as if another request deleted the row first.
        pub fn race_next_replace_with_delete(&self) {
            self.delete_before_replace.store(true, Ordering::SeqCst);
        }

        /// The next replace reports a conflict while leaving the row in place.
        pub fn conflict_next_replace(&self) {
            self.conflict_on_replace.store(true, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl FeedingRepository for MockFeedingRepository {
        async fn list(&self) -> Result<Vec<feeding::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<feeding::Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, input: feeding::Model) -> Result<feeding::Model, ServiceError> {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let created = feeding::Model { id: *last_id, ..input };
            self.rows.lock().unwrap().insert(created.id, created.clone());
            Ok(created)
        }

        async fn replace(&self, input: feeding::Model) -> Result<CommitOutcome, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            if self.delete_before_replace.swap(false, Ordering::SeqCst) {
                rows.remove(&input.id);
            }
            if self.conflict_on_replace.swap(false, Ordering::SeqCst) {
                return Ok(CommitOutcome::Conflict);
            }
            match rows.get_mut(&input.id) {
                Some(row) => {
                    *row = input;
                    Ok(CommitOutcome::Committed)
                }
                None => Ok(CommitOutcome::Conflict),
            }
        }

        async fn remove(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }

        async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().contains_key(&id))
        }
    }
}

use std::sync::Arc;
use tracing::{info, instrument, warn};

use models::feeding;

use super::CommitOutcome;
use crate::errors::ServiceError;
use crate::feeding::repository::FeedingRepository;

const ENTITY: &str = "feeding";

/// Application service for the feeding resource.
/// Turns repository answers into `NotFound` / `Validation` errors.
pub struct FeedingService<R: FeedingRepository> {
    repo: Arc<R>,
}

impl<R: FeedingRepository> FeedingService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<feeding::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<feeding::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: feeding::Model) -> Result<feeding::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "created feeding");
        Ok(created)
    }

    /// Replace the whole record at `id`. The body must carry the same id.
    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i32, input: feeding::Model) -> Result<(), ServiceError> {
        if input.id != id {
            return Err(ServiceError::Validation(format!(
                "path id {} does not match body id {}",
                id, input.id
            )));
        }
        match self.repo.replace(input).await? {
            CommitOutcome::Committed => {
                info!(id, "replaced feeding");
                Ok(())
            }
            CommitOutcome::Conflict => {
                if self.repo.exists(id).await? {
                    warn!(id, "replace conflicted on a feeding that still exists");
                    Err(ServiceError::Db(format!("concurrency conflict replacing {} {}", ENTITY, id)))
                } else {
                    Err(ServiceError::not_found(ENTITY, id))
                }
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.remove(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        info!(id, "deleted feeding");
        Ok(())
    }
}

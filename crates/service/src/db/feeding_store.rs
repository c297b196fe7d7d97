use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{debug, warn};
use models::feeding::{self, Entity as FeedingEntity};
use crate::errors::ServiceError;
use crate::feeding::CommitOutcome;

/// All feedings, ascending by id.
pub async fn list_feedings(db: &DatabaseConnection) -> Result<Vec<feeding::Model>, ServiceError> {
    let rows = FeedingEntity::find().order_by_asc(feeding::Column::Id).all(db).await?;
    Ok(rows)
}

/// Get a feeding by id.
pub async fn get_feeding(db: &DatabaseConnection, id: i32) -> Result<Option<feeding::Model>, ServiceError> {
    let found = FeedingEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

pub async fn feeding_exists(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    Ok(get_feeding(db, id).await?.is_some())
}

/// Insert a feeding; any id on the input is discarded and the store assigns one.
pub async fn insert_feeding(db: &DatabaseConnection, input: feeding::Model) -> Result<feeding::Model, ServiceError> {
    let created = input.into_new().insert(db).await?;
    Ok(created)
}

/// Overwrite every column of the row keyed by `input.id` and commit.
///
/// Zero rows touched means the row went away after the caller looked at it;
/// that is reported as [`CommitOutcome::Conflict`] instead of an error.
pub async fn replace_feeding(db: &DatabaseConnection, input: feeding::Model) -> Result<CommitOutcome, ServiceError> {
    let id = input.id;
    let txn = db.begin().await?;
    match input.into_replacement().update(&txn).await {
        Ok(_) => {
            txn.commit().await?;
            debug!(id, "feeding replace committed");
            Ok(CommitOutcome::Committed)
        }
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
            txn.rollback().await?;
            warn!(id, "feeding replace hit no rows");
            Ok(CommitOutcome::Conflict)
        }
        Err(e) => {
            txn.rollback().await?;
            Err(e.into())
        }
    }
}

/// Delete a feeding; returns false if there was nothing to delete.
pub async fn remove_feeding(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    if FeedingEntity::find_by_id(id).one(&txn).await?.is_none() {
        txn.rollback().await?;
        return Ok(false);
    }
    FeedingEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(true)
}

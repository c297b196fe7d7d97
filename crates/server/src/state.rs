use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::feeding::{FeedingService, SeaOrmFeedingRepository};

pub type Feedings = FeedingService<SeaOrmFeedingRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub feedings: Arc<Feedings>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmFeedingRepository { db });
        Self { feedings: Arc::new(FeedingService::new(repo)) }
    }
}

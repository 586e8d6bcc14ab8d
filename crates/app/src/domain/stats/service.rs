//! Stats service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::stats::{errors::StatsServiceError, models::Stats, repository::PgStatsRepository},
};

#[derive(Debug, Clone)]
pub struct PgStatsService {
    db: Db,
    repository: PgStatsRepository,
}

impl PgStatsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStatsRepository::new(),
        }
    }
}

#[async_trait]
impl StatsService for PgStatsService {
    async fn get_stats(&self) -> Result<Stats, StatsServiceError> {
        let mut tx = self.db.begin().await?;

        let row = self.repository.get_stats(&mut tx).await?;

        tx.commit().await?;

        Ok(Stats::try_from(row)?)
    }
}

#[automock]
#[async_trait]
pub trait StatsService: Send + Sync {
    /// Current store-wide counters.
    async fn get_stats(&self) -> Result<Stats, StatsServiceError>;
}

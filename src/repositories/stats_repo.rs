//! Portal statistics
//!
//! Dashboard cardinalities for the five collections. Counts are
//! estimated from collection metadata (fast, possibly stale), never
//! filtered exact counts.

use serde::Serialize;

use crate::db::{collections, Database};
use crate::errors::{AppError, AppResult};

/// Approximate per-collection record counts
#[derive(Debug, Clone, Serialize)]
pub struct PortalStats {
    pub hotline: u64,
    pub users: u64,
    pub reviews: u64,
    pub homereview: u64,
    pub complains: u64,
}

/// Statistics repository
pub struct StatsRepository {
    db: Database,
}

impl StatsRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    /// Estimated counts over all five collections.
    pub async fn overview(&self) -> AppResult<PortalStats> {
        Ok(PortalStats {
            hotline: self.estimate(collections::HOTLINES).await?,
            users: self.estimate(collections::USERS).await?,
            reviews: self.estimate(collections::REVIEWS).await?,
            homereview: self.estimate(collections::HOME_REVIEWS).await?,
            complains: self.estimate(collections::COMPLAINTS).await?,
        })
    }

    async fn estimate(&self, name: &str) -> AppResult<u64> {
        self.db
            .collection(name)
            .estimated_document_count()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

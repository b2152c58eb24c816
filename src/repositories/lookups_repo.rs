//! Reference data repository
//!
//! Read-only lookups: the emergency hotline directory and the home-page
//! review carousel. No lifecycle beyond listing.

use futures_util::TryStreamExt;
use mongodb::bson::Document;
use mongodb::Collection;

use crate::db::{collections, Database};
use crate::errors::{AppError, AppResult};

/// Reference data repository
pub struct LookupsRepository {
    hotlines: Collection<Document>,
    home_reviews: Collection<Document>,
}

impl LookupsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            hotlines: db.collection(collections::HOTLINES),
            home_reviews: db.collection(collections::HOME_REVIEWS),
        }
    }

    pub async fn hotlines(&self) -> AppResult<Vec<Document>> {
        fetch_all(&self.hotlines).await
    }

    pub async fn home_reviews(&self) -> AppResult<Vec<Document>> {
        fetch_all(&self.home_reviews).await
    }
}

async fn fetch_all(coll: &Collection<Document>) -> AppResult<Vec<Document>> {
    coll.find(Document::new())
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .try_collect::<Vec<Document>>()
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))
}

//! Reviews repository
//!
//! Data access for the `reviews` collection: citizen feedback records
//! with `email`, `comments` and `rating` fields.

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;

use crate::db::{collections, Database};
use crate::domain::paging::{Listing, PageParams};
use crate::errors::{AppError, AppResult};
use crate::repositories::paged_query::{self, PagedQuery};

/// Default page size for review listings.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Reviews data access repository
pub struct ReviewsRepository {
    coll: Collection<Document>,
}

impl ReviewsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(collections::REVIEWS),
        }
    }

    pub async fn insert(&self, review: Document) -> AppResult<InsertOneResult> {
        self.coll
            .insert_one(review)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Looks a review up by id. A missing id is `None`, never an error.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Document>> {
        let object_id = parse_object_id(id)?;

        self.coll
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Lists reviews: complete for an email filter, paginated otherwise.
    pub async fn list(&self, email: Option<&str>, params: PageParams) -> AppResult<Listing> {
        paged_query::list(&self.coll, email, PagedQuery::new(params)).await
    }

    /// Replaces the feedback fields of a review by id, upserting.
    ///
    /// Only `comments` and `rating` are taken from the body; anything
    /// else is ignored. A missing id creates a document bearing only
    /// these fields.
    pub async fn update_feedback(&self, id: &str, body: &Document) -> AppResult<UpdateResult> {
        let object_id = parse_object_id(id)?;

        let mut fields = Document::new();
        for key in ["comments", "rating"] {
            if let Some(value) = body.get(key) {
                fields.insert(key, value.clone());
            }
        }

        self.coll
            .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete_by_id(&self, id: &str) -> AppResult<DeleteResult> {
        let object_id = parse_object_id(id)?;

        self.coll
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InternalError(format!("invalid object id: {}", id)))
}

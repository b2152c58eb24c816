//! Complaints repository
//!
//! Data access for the `complains` collection. Complaints are filed
//! against a location (`division`/`district`/`subDistrict`) and a
//! `problem` category; their `status` starts unset and transitions once
//! to `"received"` when staff acknowledge them.

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;

use crate::db::{collections, Database};
use crate::domain::paging::{Listing, PageParams};
use crate::errors::{AppError, AppResult};
use crate::repositories::paged_query::{self, PagedQuery};
use crate::repositories::search;

/// Default page size for complaint listings.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Optional field filters of a complaint listing; all supplied values
/// combine as an implicit AND.
#[derive(Debug, Default, Clone)]
pub struct ComplaintFilters {
    pub division: Option<String>,
    pub district: Option<String>,
    pub sub_district: Option<String>,
    pub problem: Option<String>,
}

/// Complaints data access repository
pub struct ComplaintsRepository {
    coll: Collection<Document>,
}

impl ComplaintsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(collections::COMPLAINTS),
        }
    }

    pub async fn insert(&self, complaint: Document) -> AppResult<InsertOneResult> {
        self.coll
            .insert_one(complaint)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Lists complaints: complete for an email filter, paginated and
    /// field-filtered otherwise.
    pub async fn list(
        &self,
        email: Option<&str>,
        filters: &ComplaintFilters,
        params: PageParams,
    ) -> AppResult<Listing> {
        let query = PagedQuery::new(params)
            .filter_eq("division", filters.division.as_deref())
            .filter_eq("district", filters.district.as_deref())
            .filter_eq("subDistrict", filters.sub_district.as_deref())
            .filter_eq("problem", filters.problem.as_deref());

        paged_query::list(&self.coll, email, query).await
    }

    /// Acknowledges a complaint: sets `status` to `"received"` by id,
    /// upserting. One-way; repeating it changes nothing and still
    /// reports success.
    pub async fn mark_received(&self, id: &str) -> AppResult<UpdateResult> {
        let object_id = parse_object_id(id)?;

        self.coll
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "status": "received" } },
            )
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

    /// Exact nid/email search over complaints.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Document>> {
        search::find_by_nid_or_email(&self.coll, query).await
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InternalError(format!("invalid object id: {}", id)))
}

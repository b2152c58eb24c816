//! Users repository
//!
//! Data access for the `users` collection. The email field is the
//! natural key: it anchors self-access decisions and the
//! check-then-insert duplicate prevention on registration (there is no
//! persisted uniqueness constraint). One record, designated by a fixed
//! email, is the irrevocable super-admin and can never be deleted.

use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;

use crate::config::SUPER_ADMIN_EMAIL;
use crate::db::{collections, Database};
use crate::domain::paging::{Listing, PageParams};
use crate::errors::{AppError, AppResult};
use crate::repositories::paged_query::{self, PagedQuery};
use crate::repositories::search;

/// Default page size for user listings.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Users data access repository
pub struct UsersRepository {
    coll: Collection<Document>,
}

impl UsersRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            coll: db.collection(collections::USERS),
        }
    }

    /// Looks a user up by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Document>> {
        self.coll
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Looks a user up by id. A missing id is `None`, never an error.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Document>> {
        let object_id = parse_object_id(id)?;

        self.coll
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Whether the stored record for this email carries the admin role.
    pub async fn is_admin(&self, email: &str) -> AppResult<bool> {
        let record = self.find_by_email(email).await?;
        Ok(record
            .map(|user| user.get_str("role") == Ok("admin"))
            .unwrap_or(false))
    }

    /// Inserts a new user unless one with the same email already exists.
    ///
    /// Returns `None` when the email is taken (and inserts nothing).
    /// Check-then-insert only; the store enforces no uniqueness.
    pub async fn create_if_absent(&self, user: Document) -> AppResult<Option<InsertOneResult>> {
        let email = user.get_str("email").unwrap_or_default();

        if self.find_by_email(email).await?.is_some() {
            return Ok(None);
        }

        let result = self
            .coll
            .insert_one(user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Some(result))
    }

    /// Insert-or-replace of the given fields by id.
    ///
    /// Upsert semantics: a missing id creates a new document bearing
    /// only the updated fields.
    pub async fn upsert_by_id(&self, id: &str, fields: Document) -> AppResult<UpdateResult> {
        let object_id = parse_object_id(id)?;

        self.coll
            .update_one(doc! { "_id": object_id }, doc! { "$set": fields })
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Promotes a user to the admin role by id. There is no demotion
    /// path.
    pub async fn promote_admin(&self, id: &str) -> AppResult<UpdateResult> {
        self.upsert_by_id(id, doc! { "role": "admin" }).await
    }

    /// Deletes a user by id, unless the record is the protected
    /// super-admin.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthorizationError` - the record's email is the
    ///   fixed super-admin address; nothing is deleted
    pub async fn delete_guarded(&self, id: &str) -> AppResult<DeleteResult> {
        if let Some(user) = self.find_by_id(id).await? {
            if is_protected(&user) {
                return Err(AppError::AuthorizationError("forbidden access".to_string()));
            }
        }

        let object_id = parse_object_id(id)?;

        self.coll
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Lists users: complete for an email filter, paginated otherwise.
    pub async fn list(&self, email: Option<&str>, params: PageParams) -> AppResult<Listing> {
        paged_query::list(&self.coll, email, PagedQuery::new(params)).await
    }

    /// Exact nid/email search over users.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Document>> {
        search::find_by_nid_or_email(&self.coll, query).await
    }
}

/// Whether this record is the one identity the portal refuses to delete.
pub fn is_protected(user: &Document) -> bool {
    user.get_str("email") == Ok(SUPER_ADMIN_EMAIL)
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    // The source surfaced a malformed id as a server error, not a 400.
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InternalError(format!("invalid object id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_record_is_protected() {
        let user = doc! { "name": "Root", "email": SUPER_ADMIN_EMAIL };
        assert!(is_protected(&user));
    }

    #[test]
    fn test_ordinary_records_are_not_protected() {
        assert!(!is_protected(&doc! { "email": "citizen@example.com" }));
        assert!(!is_protected(&doc! { "name": "no email at all" }));
    }

    #[test]
    fn test_malformed_id_is_a_server_error() {
        let err = parse_object_id("not-a-hex-id").unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[test]
    fn test_well_formed_id_parses() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
    }
}

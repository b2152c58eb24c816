//! HTTP handlers
//!
//! Thin request/response shaping over the repositories. Bodies stay
//! loosely typed (`serde_json::Value` → `bson::Document`); nothing is
//! validated on the way in, and store-level results are echoed back in
//! driver shape (`insertedId`, `matchedCount`/`modifiedCount`,
//! `deletedCount`).

pub mod complaints;
pub mod lookups;
pub mod reviews;
pub mod stats;
pub mod tokens;
pub mod users;

use mongodb::bson::Document;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde_json::{json, Value};

use crate::errors::{AppError, AppResult};

/// Converts a JSON request body into a BSON document.
///
/// A non-object body is a server error, the same way the source system
/// surfaced it; no shape checking happens beyond that.
pub(crate) fn body_to_document(body: Value) -> AppResult<Document> {
    mongodb::bson::to_document(&body)
        .map_err(|e| AppError::InternalError(format!("request body is not a document: {}", e)))
}

pub(crate) fn insert_body(result: &InsertOneResult) -> Value {
    json!({
        "acknowledged": true,
        "insertedId": result.inserted_id,
    })
}

pub(crate) fn update_body(result: &UpdateResult) -> Value {
    json!({
        "acknowledged": true,
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
        "upsertedId": result.upserted_id,
    })
}

pub(crate) fn delete_body(result: &DeleteResult) -> Value {
    json!({
        "acknowledged": true,
        "deletedCount": result.deleted_count,
    })
}
